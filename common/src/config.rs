use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};
use log::{debug, warn};

const ENV_PREFIX: &str = "CONNECT4_";

/// Reads settings from a HOCON document.
///
/// A key is resolved from the environment first (`CONNECT4_<KEY>` upper-cased), then from the
/// block named by `scope`, and finally from the top level of the document.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: &str) -> Result<Self> {
        let path = path.as_ref();

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()
            .with_context(|| format!("Failed to parse config file at: {:?}", path))?;

        Ok(Self::from_hocon(hocon, scope))
    }

    /// Loads the file when it exists, otherwise falls back to an empty document so every
    /// setting takes its default.
    pub fn new_or_empty(path: impl AsRef<Path>, scope: &str) -> Result<Self> {
        let path = path.as_ref();

        if path.is_file() {
            Self::new(path, scope)
        } else {
            warn!("Config file {:?} not found, using defaults", path);
            Ok(Self::empty(scope))
        }
    }

    pub fn parse_str(content: &str, scope: &str) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(content)
            .context("Failed to load config string")?
            .hocon()
            .context("Failed to parse config string")?;

        Ok(Self::from_hocon(hocon, scope))
    }

    pub fn empty(scope: &str) -> Self {
        Self::from_hocon(Hocon::Hash(Default::default()), scope)
    }

    /// Replaces the captured process environment, mostly useful for tests.
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&env_key(name)) {
            debug!("Config {} overridden from environment", name);
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self).with_context(|| format!("Failed to load config scope '{}'", self.scope))
    }

    fn from_hocon(hocon: Hocon, scope: &str) -> Self {
        let env = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect::<HashMap<_, _>>();

        Self {
            hocon,
            env,
            scope: scope.to_string(),
        }
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => usize::try_from(*i64).ok().map(Value::Integer),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

fn env_key(name: &str) -> String {
    format!("{}{}", ENV_PREFIX, name.to_uppercase())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(usize),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => match val.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(val) => Some(*val),
            Value::Integer(val) => Some(*val as f32),
            Value::String(val) => val.parse::<f32>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(val) => Some(val.to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
