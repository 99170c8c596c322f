// Shared prompt fragments. Each feature module keeps its own prompts.rs
// alongside it; only cross-cutting pieces live here.

use serde::{Deserialize, Deserializer};

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "あなたは日本の転職・採用事情に精通した専門家です。\
    回答は必ず有効なJSONオブジェクトのみで返してください。\
    JSONの外に説明文や謝罪文を含めないでください。\
    すべての文章は日本語で記述してください。";

/// Renders an optional labelled section, or nothing when the value is blank.
pub fn optional_section(heading: &str, value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format!("# {heading}\n{v}\n"),
        _ => String::new(),
    }
}

/// Fills `{key}` placeholders in a single left-to-right pass over the template.
///
/// Substituted values are never rescanned, so user text containing something
/// like `{resume_text}` is emitted verbatim. Braces that do not form a known
/// placeholder (the JSON examples in the templates) are copied through.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = vars.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Reads a model-reported score that may arrive as an integer, a fraction
/// (`72.5`), or a numeric string, rounding to the nearest whole number.
pub fn deserialize_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    let value = match RawScore::deserialize(deserializer)? {
        RawScore::Number(n) => n,
        RawScore::Text(s) => s
            .trim()
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid score: {s:?}")))?,
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom("score is not a finite number"));
    }
    Ok(value.round() as i64)
}
