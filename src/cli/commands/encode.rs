//! Encode command implementation

use serde::Serialize;

use crate::cli::LogLevel;
use crate::config::{build_tokenizer, read_config, EncodeArgs, OutputFormat};
use crate::tokenizer::{TokenId, Tokenizer, WordPieceTokenizer};

#[derive(Debug, Serialize)]
struct EncodeOutput {
    ids: Vec<TokenId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pieces: Option<Vec<String>>,
}

/// Render the encoding of `text` in the requested format
pub fn format_encoding(
    tokenizer: &WordPieceTokenizer,
    text: &str,
    pieces: bool,
    format: OutputFormat,
) -> Result<String, String> {
    let output = EncodeOutput {
        ids: tokenizer.encode(text),
        pieces: pieces.then(|| tokenizer.tokenize(text)),
    };

    match format {
        OutputFormat::Text => {
            let mut lines = vec![output
                .ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")];
            if let Some(pieces) = &output.pieces {
                lines.push(pieces.join(" "));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string(&output)
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(&output)
            .map_err(|e| e.to_string()),
    }
}

pub fn run_encode(args: EncodeArgs, _level: LogLevel) -> Result<(), String> {
    let spec = read_config(&args.config).map_err(|e| e.to_string())?;
    let tokenizer = build_tokenizer(&spec).map_err(|e| e.to_string())?;
    println!("{}", format_encoding(&tokenizer, &args.text, args.pieces, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WordPieceConfig;

    fn tokenizer() -> WordPieceTokenizer {
        WordPieceTokenizer::from_tokens(
            ["[PAD]", "[UNK]", "[MASK]", "un", "##able", "do"],
            WordPieceConfig::new(5),
        )
        .unwrap()
    }

    #[test]
    fn test_format_encoding_text() {
        let out = format_encoding(&tokenizer(), "doable", false, OutputFormat::Text).unwrap();
        assert_eq!(out, "5 4 0 0 0");
    }

    #[test]
    fn test_format_encoding_text_with_pieces() {
        let out = format_encoding(&tokenizer(), "doable", true, OutputFormat::Text).unwrap();
        assert_eq!(out, "5 4 0 0 0\ndo ##able");
    }

    #[test]
    fn test_format_encoding_json() {
        let out = format_encoding(&tokenizer(), "undo", false, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"ids":[1,0,0,0,0]}"#);
    }
}
