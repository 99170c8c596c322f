// Prompt templates for the interview module.
// Placeholders in braces are replaced before sending; optional sections are
// rendered to an empty string when absent.

/// Question generation. Replace: {question_count}, {job_info}, {resume_section},
/// {type_instruction}, {length_instruction}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"あなたは経験豊富な採用コンサルタントです。以下の情報から面接で聞かれる可能性が高い質問を{question_count}個生成し、それぞれに対する効果的な模範解答を作成してください。

# 求人情報
{job_info}

{resume_section}
# 条件
- {type_instruction}
- 回答は{length_instruction}程度で作成
- 模範解答は具体的なエピソードや数字を含め、STAR法（状況・課題・行動・結果）を意識した構成にしてください

# 出力形式（JSON）
{
  "questions": [
    {
      "question": "質問文",
      "answer": "模範解答",
      "category": "カテゴリ（自己紹介/志望動機/スキル/経験 のいずれか）"
    }
  ]
}"#;

/// Position-aware correction policy, inserted only when a position analysis is supplied.
pub const POSITION_POLICY: &str = r#"
【重要な添削方針】
ポジション分析の結果が提供されています。以下の観点を必ず添削に反映してください：
1. このポジションで「面接官が本当に確認したいこと」に応える記載になっているか
2. 重視される資質を経歴の中で十分にアピールできているか
3. 採用側が持ちうる懸念を、経歴の書き方で先回りして払拭できているか
4. 求人の行間（実態）を踏まえた、的確なキーワードや表現が使われているか
5. 活かせるポイントが明確に伝わる書き方になっているか
"#;

/// Document correction. Replace: {focus_instruction}, {position_policy},
/// {document_text}, {job_section}, {position_section}, {summary_hint},
/// {type_hint}, {reason_hint}, {closing_hint}
pub const CORRECTION_PROMPT_TEMPLATE: &str = r#"あなたは経験豊富なキャリアアドバイザーです。以下の履歴書・職務経歴書を{focus_instruction}してください。
{position_policy}
# 対象文書
{document_text}
{job_section}{position_section}

# 出力形式（JSON）
{
  "summary": "総合評価（2-3文で簡潔に{summary_hint}）",
  "strengths": ["強みのポイント1", "強みのポイント2", "強みのポイント3"],
  "corrections": [
    {
      "type": "改善タイプ（例：表現の改善、数値化、具体化{type_hint}など）",
      "before": "改善前の文章",
      "after": "改善後の文章",
      "reason": "なぜこの改善が必要か{reason_hint}"
    }
  ],
  "suggestions": ["さらなる改善提案1", "さらなる改善提案2"]
}

具体的な改善提案を5-10個程度含めてください。{closing_hint}"#;

/// Practice answer feedback. Replace: {question}, {user_answer},
/// {ideal_section}, {job_section}
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"あなたは経験豊富な面接官です。以下の面接回答を評価してください。

# 質問
{question}

# 応募者の回答
{user_answer}

{ideal_section}
{job_section}
# 評価基準
1. 具体性：具体的なエピソードや数字があるか
2. 論理性：STAR法（状況→課題→行動→結果）で構成されているか
3. 簡潔さ：適切な長さでまとまっているか
4. 熱意：志望度や意欲が伝わるか
5. 関連性：質問に対して適切に答えているか

# 出力形式（JSON）
{
  "score": 85,
  "scoreComment": "スコアの簡単な説明（1文）",
  "goodPoints": ["良かった点1", "良かった点2"],
  "improvements": ["改善ポイント1", "改善ポイント2"],
  "improvedAnswer": "改善した回答例（200-300文字程度）",
  "tips": "次回に活かせるアドバイス（1-2文）"
}

厳しすぎず、建設的なフィードバックを心がけてください。"#;
