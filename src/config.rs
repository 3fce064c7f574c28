use std::env::{VarError, var};
use std::str::FromStr;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub free_plan_todo_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3333,
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            free_plan_todo_limit: 10,
        }
    }
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(
                var("PORT"),
                defaults.port,
                "An error occured while parsing PORT env param",
            )?,
            scheme: var("SCHEME").unwrap_or(defaults.scheme),
            host: var("HOST").unwrap_or(defaults.host),
            free_plan_todo_limit: parse_or(
                var("FREE_PLAN_TODO_LIMIT"),
                defaults.free_plan_todo_limit,
                "An error occured while parsing FREE_PLAN_TODO_LIMIT env param",
            )?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    value: Result<String, VarError>,
    default: T,
    message: &'static str,
) -> Result<T, &'static str> {
    match value {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| message),
        Err(VarError::NotPresent) => Ok(default),
        Err(VarError::NotUnicode(_)) => Err(message),
    }
}
