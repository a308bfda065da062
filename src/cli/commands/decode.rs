//! Decode command implementation

use crate::cli::LogLevel;
use crate::config::{build_tokenizer, read_config, DecodeArgs};
use crate::tokenizer::Tokenizer;

pub fn run_decode(args: DecodeArgs, _level: LogLevel) -> Result<(), String> {
    let spec = read_config(&args.config).map_err(|e| e.to_string())?;
    let tokenizer = build_tokenizer(&spec).map_err(|e| e.to_string())?;
    let text = tokenizer.decode(&args.ids).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
