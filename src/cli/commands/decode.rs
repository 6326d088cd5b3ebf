use std::fs;

use crate::cli::parser::Commands;
use crate::core::{decode, payload::RawPayload};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Decode { file } = cmd {
        let raw = fs::read_to_string(file)?;
        let html = decode::decode(&RawPayload::identity(raw));
        println!("{}", html);
    }
    Ok(())
}
