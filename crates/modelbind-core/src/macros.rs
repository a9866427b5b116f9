// value_map
/// Build a `ValueMap` from `key => value` pairs; values go through `Value::from`.
#[macro_export]
macro_rules! value_map {
    () => {
        $crate::value::ValueMap::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::value::ValueMap::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::value::Value::from($value),
            );
        )+
        map
    }};
}
