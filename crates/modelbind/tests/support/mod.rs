#![allow(dead_code)]

use modelbind::prelude::*;
use std::collections::{BTreeMap, VecDeque};

/// Install a test subscriber once; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

///
/// Country
///

#[derive(Debug, Default, Model)]
pub struct Country {
    pub name: String,

    #[model(state)]
    pub state: ModelState,
}

///
/// Address
///

#[derive(Debug, Default, Model)]
pub struct Address {
    pub street: String,
    pub city: String,

    #[model(nested)]
    pub country: Country,

    #[model(state)]
    pub state: ModelState,
}

///
/// Profile
///

#[derive(Debug, Default, Model)]
pub struct Profile {
    #[model(skip)]
    pub avatar: Vec<Value>,
    pub bio: String,
    pub public_email_personal: String,
    pub path_avatar: String,

    #[model(nested)]
    pub address: Address,

    #[model(state)]
    pub state: ModelState,
}

///
/// User
///

#[derive(Debug, Default, Model)]
pub struct User {
    pub name: String,

    #[model(nested)]
    pub profile: Profile,

    #[model(state)]
    pub state: ModelState,
}

///
/// Account
/// optional nested model
///

#[derive(Debug, Default, Model)]
pub struct Account {
    pub login: String,

    #[model(nested)]
    pub address: Option<Address>,

    #[model(state)]
    pub state: ModelState,
}

///
/// Primitives
///

#[derive(Debug, Default, Model)]
#[model(name = "PropertyType")]
pub struct Primitives {
    pub name: String,
    pub array: Vec<Value>,
    pub bool: bool,
    pub float: f64,
    pub int: i64,
    pub nullable: Option<i64>,
    pub object: Option<Object>,
    pub string: String,
    pub without_type: Value,

    #[model(state)]
    pub state: ModelState,
}

///
/// Counter
/// wide integers and non-`Vec` collections
///

#[derive(Debug, Default, Model)]
pub struct Counter {
    pub hits: u64,
    pub slots: usize,
    pub recent: VecDeque<u32>,
    pub totals: BTreeMap<String, i64>,

    #[model(state)]
    pub state: ModelState,
}

///
/// UnionType
///

#[derive(Debug, Default, Model)]
pub struct UnionType {
    #[model(union = "object|string|int|bool|null")]
    pub union: Value,

    #[model(state)]
    pub state: ModelState,
}

///
/// Attributes
///

#[derive(Debug, Default, Model)]
pub struct Attributes {
    pub name: String,

    #[model(timestamp)]
    pub created_at: i64,

    #[model(skip)]
    pub flag: String,

    #[model(timestamp)]
    pub updated_at: i64,

    #[model(state)]
    pub state: ModelState,
}

///
/// Login
///

#[derive(Debug, Default, Model)]
pub struct Login {
    pub login: Option<String>,
    pub password: Option<String>,
    pub remember_me: bool,

    #[model(state)]
    pub state: ModelState,
}

///
/// Anonymous
///

#[derive(Debug, Model)]
#[model(name = "")]
pub struct Anonymous {
    pub int: i64,
    pub string: String,
    pub float: f64,
    pub bool: bool,

    #[model(state)]
    pub state: ModelState,
}

impl Default for Anonymous {
    fn default() -> Self {
        Self {
            int: 1,
            string: "string".to_string(),
            float: 2.5,
            bool: true,
            state: ModelState::new(),
        }
    }
}

///
/// DinamicNested
///

#[derive(Debug, Model)]
pub struct DinamicNested {
    #[model(nested)]
    pub dinamic: DynamicModel,

    #[model(state)]
    pub state: ModelState,
}

impl DinamicNested {
    pub fn new(dinamic: DynamicModel) -> Self {
        Self {
            dinamic,
            state: ModelState::new(),
        }
    }
}

/// `Dinamic` with no properties registered yet.
pub fn dinamic() -> DynamicModel {
    DynamicModel::named("Dinamic")
}
