//! Dotted-path reads and writes over any model.
//!
//! Paths resolve one segment at a time; a segment that holds a nested
//! model hands the rest of the path to that model.

use crate::{
    TIMESTAMP, clock,
    error::{NotNestedError, Result, UndefinedPropertyError},
    model::{FieldWrite, Model},
    value::{Record, Value, ValueMap},
};
use modelbind_utils::{case, path};
use tracing::{trace, warn};

pub(crate) fn has_property<M: Model + ?Sized>(model: &M, path: &str) -> bool {
    // an empty tail ("a.") counts as a single segment
    match path::split_head(path) {
        (head, None | Some("")) => model.type_collector().contains(head),
        (_, Some(_)) if !model.state().config().strict_paths => true,
        _ => resolves(model, path),
    }
}

/// Every segment is registered and every segment but the last holds a model.
fn resolves<M: Model + ?Sized>(model: &M, path: &str) -> bool {
    let (head, rest) = path::split_head(path);
    if !model.type_collector().contains(head) {
        return false;
    }

    match rest {
        None | Some("") => true,
        Some(rest) => model
            .nested(head)
            .is_some_and(|nested| resolves(nested, rest)),
    }
}

pub(crate) fn property_value<M: Model + ?Sized>(model: &mut M, path: &str) -> Result<Value> {
    let (head, rest) = path::split_head(path);

    refresh_timestamp(model, head)?;
    ensure_registered(model, head)?;

    if let Some(nested) = model.nested_mut(head) {
        return match rest {
            Some(rest) => nested.property_value(rest),
            None => snapshot(nested),
        };
    }

    let value = read_property(model, head);
    trace!(
        model = model.model_path(),
        property = head,
        kind = value.kind_label(),
        "read property"
    );

    // absent values end the path
    if let Some(rest) = rest
        && !value.is_null()
    {
        if model.state().config().strict_paths {
            return Err(NotNestedError::new(model.model_path(), head, value.kind_label()).into());
        }

        warn!(
            model = model.model_path(),
            property = head,
            tail = rest,
            "ignoring path tail on a non-model property"
        );
    }

    Ok(value)
}

pub(crate) fn set_property_value<M: Model + ?Sized>(
    model: &mut M,
    path: &str,
    value: Value,
) -> Result<()> {
    let (head, rest) = path::split_head(path);

    let Some(rest) = rest else {
        ensure_registered(model, head)?;
        let value = model.type_collector().cast(head, value);

        return write_property(model, head, value);
    };

    refresh_timestamp(model, head)?;
    ensure_registered(model, head)?;

    if let Some(nested) = model.nested_mut(head) {
        return nested.set_property_value(rest, value);
    }

    let held = read_property(model, head);
    if model.state().config().strict_paths {
        return Err(NotNestedError::new(model.model_path(), head, held.kind_label()).into());
    }

    warn!(
        model = model.model_path(),
        property = head,
        tail = rest,
        held = held.kind_label(),
        "dropping write through a non-model property"
    );

    Ok(())
}

pub(crate) fn set_properties_values<M: Model + ?Sized>(
    model: &mut M,
    data: &ValueMap,
    except: &[&str],
) -> Result<()> {
    for (key, value) in data {
        if except.contains(&key.as_str()) {
            continue;
        }

        let name = case::snake_to_camel(key);
        set_property_value(model, &name, value.clone())?;
    }

    Ok(())
}

pub(crate) fn to_map<M: Model + ?Sized>(
    model: &mut M,
    snake_case: bool,
    except: &[&str],
) -> Result<ValueMap> {
    let names: Vec<String> = model
        .property_types()
        .keys()
        .filter(|name| !except.contains(&name.as_str()))
        .cloned()
        .collect();

    let mut out = ValueMap::with_capacity(names.len());
    for name in names {
        let value = property_value(model, &name)?;
        let key = if snake_case {
            case::camel_to_snake(&name)
        } else {
            name
        };

        out.insert(key, value);
    }

    Ok(out)
}

/// Append the leaf paths of `model` under `prefix`. Model properties
/// expand into their own leaves, or vanish when no model is present.
pub(crate) fn leaf_paths<M: Model + ?Sized>(model: &M, prefix: &str, out: &mut Vec<String>) {
    for (name, property_type) in model.property_types() {
        let path = path::join(prefix, name);

        if !property_type.is_model() {
            out.push(path);
        } else if let Some(nested) = model.nested(name) {
            leaf_paths(nested, &path, out);
        }
    }
}

///
/// HELPERS
///

fn ensure_registered<M: Model + ?Sized>(
    model: &M,
    name: &str,
) -> Result<(), UndefinedPropertyError> {
    if model.type_collector().contains(name) {
        Ok(())
    } else {
        Err(UndefinedPropertyError::new(model.model_path(), name))
    }
}

fn read_property<M: Model + ?Sized>(model: &M, name: &str) -> Value {
    model
        .read_field(name)
        .or_else(|| model.state().value(name).cloned())
        .unwrap_or_default()
}

fn write_property<M: Model + ?Sized>(model: &mut M, name: &str, value: Value) -> Result<()> {
    trace!(
        model = model.model_path(),
        property = name,
        kind = value.kind_label(),
        "write property"
    );

    if let FieldWrite::Vacant(value) = model.write_field(name, value)? {
        model.state_mut().store_value(name, value);
    }

    Ok(())
}

fn refresh_timestamp<M: Model + ?Sized>(model: &mut M, name: &str) -> Result<()> {
    if !model.state().config().refresh_timestamps || !model.is_property_type(name, TIMESTAMP) {
        return Ok(());
    }

    let now = clock::now_seconds();
    trace!(
        model = model.model_path(),
        property = name,
        now,
        "refresh timestamp"
    );

    write_property(model, name, Value::Int(now))
}

fn snapshot(model: &mut dyn Model) -> Result<Value> {
    let fields = model.to_map(false, &[])?;

    Ok(Value::Nested(Record::new(model.model_name(), fields)))
}
