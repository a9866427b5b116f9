use crate::{
    model::{DynamicModel, ModelState},
    value::{Object, Value},
};
use modelbind_derive::Model;

///
/// Country
///

#[derive(Debug, Default, Model)]
pub(crate) struct Country {
    pub(crate) name: String,

    #[model(state)]
    pub(crate) state: ModelState,
}

///
/// Address
///

#[derive(Debug, Default, Model)]
pub(crate) struct Address {
    pub(crate) street: String,
    pub(crate) city: String,

    #[model(nested)]
    pub(crate) country: Country,

    #[model(state)]
    pub(crate) state: ModelState,
}

///
/// Shipment
/// optional nested model, renamed and explicitly typed fields
///

#[derive(Debug, Default, Model)]
#[model(name = "shipment")]
pub(crate) struct Shipment {
    #[model(rename = "ref")]
    pub(crate) reference: String,
    pub(crate) weight_kg: f32,
    pub(crate) labels: Vec<String>,

    #[model(kind = "")]
    pub(crate) note: Option<String>,

    #[model(union = "int|string")]
    pub(crate) code: Value,

    pub(crate) seal: Option<Object>,

    #[model(timestamp)]
    pub(crate) sent_at: i64,

    #[model(nested)]
    pub(crate) destination: Option<Address>,

    #[model(nested)]
    pub(crate) extra: DynamicModel,

    #[model(skip)]
    pub(crate) cache: Vec<u8>,

    #[model(state)]
    pub(crate) state: ModelState,
}
