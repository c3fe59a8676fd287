//! Typed, schema-checked access to environment variables.
//!
//! An [`Env`] is created once from a [`Schema`] naming each variable and its
//! type (`string`, `number` or `boolean`). Lookups read the live environment
//! on every call, coerce the raw string to the declared type, and fall back to
//! a caller-supplied default only when the variable is unset.
//!
//! ```
//! use std::collections::BTreeMap;
//! use typenv::{Env, EnvSource, Error, Schema};
//!
//! let schema = Schema::new().number("PORT").boolean("DEBUG");
//! let vars = BTreeMap::from([("DEBUG".to_owned(), "TRUE".to_owned())]);
//! let env = Env::create(schema).source(EnvSource::from_memory(vars));
//!
//! assert_eq!(env.get::<bool>("DEBUG"), Ok(true));
//! assert_eq!(env.get_or("PORT", 4000.0), Ok(4000.0));
//! assert!(matches!(env.get::<f64>("PORT"), Err(Error::MissingVariable { .. })));
//! ```
//!
//! The accessor never writes to the environment. Lookups emit `trace`-level
//! [`tracing`] events naming the key, never its value.

mod accessor;
mod coerce;
mod env;
mod error;
mod model;
mod schema;

pub use accessor::Env;
pub use env::EnvSource;
pub use error::{Error, ParseValueTypeError};
pub use model::{Declared, FromValue, NumberParsing, Value, ValueType};
pub use schema::Schema;
