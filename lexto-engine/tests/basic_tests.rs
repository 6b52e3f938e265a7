//! End-to-end tests: word list and configuration on disk through to tokens

use lexto_engine::*;
use std::io::Write;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

const WORDS: &str = "\u{feff}ข้าว
ข้าวสาร
สาร
ใน
สต๊อก
ของ
โครงการ
รับ
จำนำ
รับจำนำ
ที่
รัฐบาล
ใช้
เงิน
ภาษี
ประชาชน
";

fn write_dictionary(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("lexitron.txt");
    std::fs::write(&path, WORDS).unwrap();
    path
}

#[test]
fn test_processor_from_config_file() {
    let dir = TempDir::new().unwrap();
    let dictionary = write_dictionary(&dir);

    let config_path = dir.path().join("lexto.toml");
    let config = EngineConfig::builder()
        .dictionary_path(&dictionary)
        .build()
        .unwrap();
    std::fs::write(&config_path, config.to_toml_string().unwrap()).unwrap();

    let config = EngineConfig::from_toml_file(&config_path).unwrap();
    let processor = WordProcessor::with_config(config).unwrap();
    assert_eq!(processor.lexicon().len(), 16);

    let words = processor
        .segment_words("ข้าวสารในสต๊อกของโครงการรับจำนำข้าว")
        .unwrap();
    assert_eq!(
        words,
        vec!["ข้าวสาร", "ใน", "สต๊อก", "ของ", "โครงการ", "รับจำนำ", "ข้าว"]
    );
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = WordProcessor::builder()
        .dictionary_path(dir.path().join("missing.txt"))
        .build();
    assert!(matches!(result, Err(EngineError::Dictionary { .. })));
}

#[test]
fn test_comment_only_dictionary_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# lexitron export").unwrap();

    let result = WordProcessor::builder()
        .dictionary_path(file.path())
        .allow_comments(true)
        .build();
    assert!(matches!(result, Err(EngineError::EmptyLexicon)));
}

#[test]
fn test_invalid_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[performance]\nthreads = 0").unwrap();
    assert!(matches!(
        EngineConfig::from_toml_file(file.path()),
        Err(EngineError::ConfigError(_))
    ));
}

#[test]
fn test_token_offsets_across_sentences() {
    let dir = TempDir::new().unwrap();
    let processor = WordProcessor::builder()
        .dictionary_path(write_dictionary(&dir))
        .build()
        .unwrap();

    let text = "รัฐบาลใช้เงิน. ภาษีของประชาชน";
    let tokens = processor.tokenize(Input::from_text(text)).unwrap();

    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.start, expected_start);
        assert_eq!(&text[token.range()], token.text);
        expected_start = token.end;
    }
    assert_eq!(expected_start, text.len());

    let texts: Vec<&str> = tokens.iter().map(Token::as_str).collect();
    assert_eq!(
        texts,
        vec!["รัฐบาล", "ใช้", "เงิน", ".", " ", "ภาษี", "ของ", "ประชาชน"]
    );
}

#[test]
fn test_lazy_tokenizer_matches_eager() {
    let processor = WordProcessor::new(Lexicon::from_words(["ab", "cd"])).unwrap();
    let text = "abcd! cdab";

    let lazy: Vec<Token> = processor
        .tokenizer(text)
        .collect::<lexto_core::Result<_>>()
        .unwrap();
    assert_eq!(lazy, processor.tokenize_text(text).unwrap());
}

#[test]
fn test_processors_share_lexicon() {
    let lexicon = Arc::new(Lexicon::from_words(["ab", "c"]));
    let whole = WordProcessor::builder()
        .shared_lexicon(Arc::clone(&lexicon))
        .splitter(SplitterKind::Whole)
        .build()
        .unwrap();
    let split = WordProcessor::builder()
        .shared_lexicon(Arc::clone(&lexicon))
        .build()
        .unwrap();

    assert!(Arc::ptr_eq(whole.lexicon(), split.lexicon()));
    assert_eq!(whole.segment_words("abc").unwrap(), vec!["ab", "c"]);
}

#[test]
fn test_parallel_batch() {
    let processor = WordProcessor::builder()
        .lexicon(Lexicon::from_words(["ab", "cd"]))
        .threads(Some(2))
        .parallel_threshold(2)
        .build()
        .unwrap();

    let documents: Vec<String> = (0..32).map(|i| "abcd ".repeat(i)).collect();
    let texts: Vec<&str> = documents.iter().map(String::as_str).collect();

    let batch = processor.tokenize_batch(&texts).unwrap();
    assert_eq!(batch.len(), 32);
    for (i, tokens) in batch.iter().enumerate() {
        assert_eq!(tokens.len(), i * 3);
    }
}

#[test]
fn test_tokens_serialize() {
    let processor = WordProcessor::new(Lexicon::from_words(["ab"])).unwrap();
    let tokens = processor.tokenize_text("ab").unwrap();
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(json, r#"[{"text":"ab","start":0,"end":2}]"#);
}
