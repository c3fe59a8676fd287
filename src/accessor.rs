use crate::coerce::{parse_boolean, parse_number};
use crate::env::EnvSource;
use crate::error::Error;
use crate::model::{Declared, FromValue, NumberParsing, Value, ValueType};
use crate::schema::Schema;

/// Schema-bound, read-only accessor for environment variables.
///
/// Every lookup re-reads the source; nothing is cached.
#[derive(Debug, Clone)]
pub struct Env {
    schema: Schema,
    source: EnvSource,
    number_parsing: NumberParsing,
}

impl Env {
    /// Bind an accessor to `schema`, reading from the process environment.
    ///
    /// The schema is not validated here; an empty schema is accepted and
    /// rejects every key on lookup.
    pub fn create(schema: Schema) -> Self {
        Self {
            schema,
            source: EnvSource::default(),
            number_parsing: NumberParsing::default(),
        }
    }

    pub fn source(mut self, source: EnvSource) -> Self {
        self.source = source;
        self
    }

    pub fn number_parsing(mut self, number_parsing: NumberParsing) -> Self {
        self.number_parsing = number_parsing;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn source_env(&self) -> &EnvSource {
        &self.source
    }

    pub fn source_env_mut(&mut self) -> &mut EnvSource {
        &mut self.source
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.schema.contains_key(key)
    }

    /// Look up `key` as the type `T`, failing if it is unset.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use typenv::{Env, EnvSource, Schema};
    ///
    /// let vars = BTreeMap::from([("PORT".to_owned(), "3000".to_owned())]);
    /// let env = Env::create(Schema::new().number("PORT"))
    ///     .source(EnvSource::from_memory(vars));
    ///
    /// assert_eq!(env.get::<f64>("PORT"), Ok(3000.0));
    /// ```
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T, Error> {
        self.get_typed(key, None)
    }

    /// Look up `key` as the type `T`, returning `default` if it is unset.
    pub fn get_or<T: FromValue>(&self, key: &str, default: T) -> Result<T, Error> {
        self.get_typed(key, Some(default))
    }

    /// Untyped lookup.
    ///
    /// A supplied `default` is returned unchanged when `key` is unset; it is
    /// not checked against the declared type.
    pub fn get_value(&self, key: &str, default: Option<Value>) -> Result<Value, Error> {
        let declared = self.declared(key)?;

        let Some(raw) = self.source.get_var(key) else {
            return match default {
                Some(value) => {
                    tracing::trace!(key, resolved = "default", "environment lookup");
                    Ok(value)
                }
                None => Err(Error::MissingVariable {
                    key: key.to_owned(),
                }),
            };
        };

        let value = self.coerce(key, declared, raw)?;
        tracing::trace!(
            key,
            resolved = "environment",
            value_type = %value.value_type(),
            "environment lookup"
        );
        Ok(value)
    }

    fn get_typed<T: FromValue>(&self, key: &str, default: Option<T>) -> Result<T, Error> {
        if let Declared::Known(declared) = self.declared(key)?
            && *declared != T::VALUE_TYPE
        {
            return Err(Error::TypeMismatch {
                key: key.to_owned(),
                declared: *declared,
                requested: T::VALUE_TYPE,
            });
        }

        let value = self.get_value(key, default.map(Into::into))?;
        let found = value.value_type();
        T::from_value(value).ok_or_else(|| Error::TypeMismatch {
            key: key.to_owned(),
            declared: found,
            requested: T::VALUE_TYPE,
        })
    }

    fn declared(&self, key: &str) -> Result<&Declared, Error> {
        self.schema.get(key).ok_or_else(|| Error::UnknownKey {
            key: key.to_owned(),
        })
    }

    fn coerce(&self, key: &str, declared: &Declared, raw: String) -> Result<Value, Error> {
        match declared {
            Declared::Known(ValueType::String) => Ok(Value::String(raw)),
            Declared::Known(ValueType::Number) => match parse_number(&raw, self.number_parsing) {
                Some(number) => Ok(Value::Number(number)),
                None => Err(Error::InvalidNumber {
                    key: key.to_owned(),
                    value: raw,
                }),
            },
            Declared::Known(ValueType::Boolean) => match parse_boolean(&raw) {
                Some(flag) => Ok(Value::Boolean(flag)),
                None => Err(Error::InvalidBoolean {
                    key: key.to_owned(),
                    value: raw,
                }),
            },
            Declared::Unrecognized(tag) => Err(Error::UnsupportedType {
                key: key.to_owned(),
                tag: tag.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn env_with(schema: Schema, vars: &[(&str, &str)]) -> Env {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        Env::create(schema).source(EnvSource::from_memory(map))
    }

    #[test]
    fn unknown_key_wins_over_default() {
        let env = env_with(Schema::new().number("PORT"), &[("INVALID", "1")]);

        let err = env
            .get_value("INVALID", Some(Value::Number(1.0)))
            .expect_err("key is not in schema");
        assert_eq!(
            err,
            Error::UnknownKey {
                key: "INVALID".to_owned()
            }
        );
    }

    #[test]
    fn default_is_returned_unconverted() {
        let env = env_with(Schema::new().number("PORT"), &[]);

        let value = env
            .get_value("PORT", Some(Value::from("not a number")))
            .expect("default should be returned");
        assert_eq!(value, Value::String("not a number".to_owned()));
    }

    #[test]
    fn unsupported_tag_only_fails_when_value_present() {
        let schema = Schema::from_tags([("WORKERS", "integer")]);

        let unset = env_with(schema.clone(), &[]);
        assert_eq!(
            unset.get_value("WORKERS", Some(Value::Number(4.0))),
            Ok(Value::Number(4.0))
        );

        let set = env_with(schema, &[("WORKERS", "4")]);
        assert_eq!(
            set.get_value("WORKERS", None),
            Err(Error::UnsupportedType {
                key: "WORKERS".to_owned(),
                tag: "integer".to_owned(),
            })
        );
    }

    #[test]
    fn typed_lookup_checks_declared_type_first() {
        let env = env_with(Schema::new().number("PORT"), &[]);

        assert_eq!(
            env.get::<bool>("PORT"),
            Err(Error::TypeMismatch {
                key: "PORT".to_owned(),
                declared: ValueType::Number,
                requested: ValueType::Boolean,
            })
        );
    }

    #[test]
    fn typed_lookup_on_unrecognized_tag_reports_unsupported_type() {
        let env = env_with(Schema::from_tags([("WORKERS", "integer")]), &[("WORKERS", "4")]);

        assert!(matches!(
            env.get::<f64>("WORKERS"),
            Err(Error::UnsupportedType { .. })
        ));
        assert!(env.contains_key("WORKERS"));
    }

    #[test]
    fn strict_number_parsing_is_configurable() {
        let schema = Schema::new().number("RETRIES");
        let loose = env_with(schema.clone(), &[("RETRIES", "")]);
        assert_eq!(loose.get::<f64>("RETRIES"), Ok(0.0));

        let strict = loose.clone().number_parsing(NumberParsing::Strict);
        assert_eq!(
            strict.get::<f64>("RETRIES"),
            Err(Error::InvalidNumber {
                key: "RETRIES".to_owned(),
                value: String::new(),
            })
        );
    }
}
