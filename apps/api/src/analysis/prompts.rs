// Prompt templates for the analysis module.

/// Quick diagnosis. Replace: {resume_text}, {job_info}
pub const QUICK_DIAGNOSIS_PROMPT_TEMPLATE: &str = r#"あなたは転職市場の専門アナリストです。以下の職務経歴と求人情報を分析し、クイック診断を行ってください。

【職務経歴】
{resume_text}

【求人情報】
{job_info}

以下のJSON形式で回答してください。JSONのみを返してください。

{
  "matchScore": <0-100の整数。候補者と求人の適合度をパーセントで評価>,
  "matchComment": "<マッチ度についての1文の簡潔な評価コメント>",
  "marketView": "<候補者の転職市場における客観的な評価を2-3文で>",
  "instantValue": ["<即戦力として評価されやすい経験やスキル1>", "<2>", "<3>"],
  "positionReality": {
    "title": "<求人の本質を突いた1行タイトル>",
    "summary": "<このポジションの実態を3-4文で。求人票の表面的な記載ではなく、実際に何が求められるかを分析>"
  }
}"#;

/// Market evaluation. Replace: {job_label}, {resume_text}, {job_section}, {competitor_scope}
pub const MARKET_EVALUATION_PROMPT_TEMPLATE: &str = r#"あなたは日本の転職市場に精通したキャリアアナリストです。以下の職務経歴{job_label}を分析し、市場評価を行ってください。

【職務経歴】
{resume_text}

{job_section}以下のJSON形式で回答してください。JSONのみを返してください。

{
  "marketView": {
    "summary": "<2-3文で候補者の市場価値を客観的に評価>",
    "instantValue": ["<即戦力として評価される経験やスキル>"],
    "growingDemand": ["<需要が伸びているスキル>"],
    "reproducibleResults": ["<再現性のある実績>"]
  },
  "salaryEstimate": {
    "range": "<想定年収レンジ。例: '420〜550万円'>",
    "currentComparison": "<'up' | 'flat' | 'negotiation_needed' のいずれか>",
    "reasoning": "<年収レンジの推定根拠を1-2文で>",
    "note": "<推定値である旨の注記>"
  },
  "selectionOutlook": {
    "grade": "<'A' | 'B' | 'C' のいずれか。A=通過可能性が高い、B=中程度、C=要対策>",
    "comment": "<選考通過可能性についてのコメントを1-2文で>",
    "keyFactors": ["<合否を分ける重要なポイント>"]
  },
  "competitorProfile": {
    "typicalBackground": "<応募しそうな他の候補者像を2-3文で>",
    "competitiveAdvantages": ["<他候補に勝っている点>"],
    "potentialWeaknesses": ["<他候補に劣る可能性がある点>"]
  },
  "negotiationLeverage": {
    "salaryNegotiation": ["<年収交渉で使える材料>"],
    "conditionNegotiation": ["<条件交渉で使えるポイント>"],
    "timingAdvice": "<交渉タイミングのアドバイスを1-2文で>"
  },
  "strengths": {
    "execution": "<実行力についての1文評価>",
    "continuity": "<継続性についての1文評価>",
    "problemSolving": "<問題解決力についての1文評価>"
  },
  "growthAreas": {
    "quantification": "<成果の数値化についての改善アドバイス>",
    "decisionMaking": "<意思決定経験についての改善アドバイス>",
    "crossFunctional": "<横断プロジェクトについての改善アドバイス>"
  },
  "careerDirections": [
    {
      "direction": "<キャリア方向性の名称>",
      "description": "<その方向性の説明と適性理由>",
      "relevantIndustries": ["<関連業界>"]
    }
  ],
  "profileSummary": {
    "primarySkills": ["<主要スキル>"],
    "experienceYears": "<総経験年数>",
    "jobCategory": "<職種カテゴリ>",
    "seniorityLevel": "<ジュニア/ミドル/シニア/マネージャー>",
    "estimatedSalaryRange": "<想定年収レンジ>",
    "industryExperience": ["<経験業界>"],
    "uniqueStrengths": ["<ユニークな強み>"],
    "leadershipExperience": "<リーダーシップ経験の有無と内容>",
    "careerHighlight": "<最も印象的な実績>"
  },
  "agentMatchReasons": {
    "itSpecialist": { "applicable": <true/false>, "reasons": ["<IT専門エージェントが適している理由>"] },
    "highClass": { "applicable": <true/false>, "reasons": ["<ハイクラスエージェントが適している理由>"] },
    "general": { "applicable": <true/false>, "reasons": ["<総合型エージェントが適している理由>"] },
    "youngCareer": { "applicable": <true/false>, "reasons": ["<20代・若手向けエージェントが適している理由>"] }
  }
}

重要な注意点:
- careerDirections は3件記載
- salaryEstimate.range は日本円で具体的な数値レンジを記載
- competitorProfile は{competitor_scope}応募しそうな他の候補者を想定
- negotiationLeverage は具体的で実践的なアドバイスを記載
- agentMatchReasons では、該当しない場合は applicable: false として reasons は空配列"#;

/// Position analysis. Replace: {resume_intro}, {job_info}, {resume_section}, {your_fit_schema}
pub const POSITION_ANALYSIS_PROMPT_TEMPLATE: &str = r#"あなたは採用の裏側を熟知した元人事マネージャーであり、転職市場のアナリストです。
以下の求人情報を深く分析し、求職者が求人票だけでは読み取れない「ポジションの実態」と「企業の本当の状況」を言語化してください。
{resume_intro}
【重要な制約】
- 推測は「〜と考えられます」「〜の可能性があります」と明記する
- 断定的な表現は避ける
- 建設的で、応募者が面接準備に活用できる情報を提供する
- ネガティブすぎる推測は避けるが、リスクは正直に伝える

# 求人情報
{job_info}

{resume_section}
# 出力形式（JSON）
{
  "positionReality": {
    "title": "ポジション名の要約（例：実質的には○○寄りの△△）",
    "summary": "このポジションの実態を3-4文で要約",
    "dayInLife": "このポジションの1日の業務イメージ（3-4文）",
    "teamContext": "想定されるチーム構成や報告ライン（2-3文）"
  },
  "hiddenContext": {
    "companyPains": [
      { "pain": "企業が抱えていると推測される課題", "evidence": "求人票のどの文言からそう読み取れるか", "implication": "業務への影響（1-2文）" }
    ],
    "whyNow": {
      "primaryReason": "最も可能性が高い採用理由",
      "reasoning": "なぜそう考えるか（2-3文）"
    }
  },
  "riskScenarios": [
    { "scenario": "入社後に起こりうるリスク", "signals": "求人票のどの部分から読み取るか", "mitigation": "面接で確認すべきこと、または対処法" }
  ],
  "interviewFocus": {
    "whatTheyReallyWant": "面接官が本当に確認したいこと（2-3文）",
    "keyQualities": [
      { "quality": "重視される資質", "why": "なぜそれが重要か（1-2文）" }
    ],
    "possibleConcerns": "採用側が候補者に対して持ちがちな懸念点（2-3文）"
  }{your_fit_schema}
}

companyPains、riskScenarios、keyQualities はそれぞれ3件記載してください。
求人票の文言を深く読み解き、応募者が面接で優位に立てる情報を提供してください。"#;

/// Appended to the position analysis schema when a resume is supplied.
pub const YOUR_FIT_SCHEMA: &str = r#",
  "yourFit": {
    "strongConnections": [
      { "yourExperience": "あなたの具体的な経験", "howItConnects": "それがこのポジションでどう活きるか（2-3文）" }
    ],
    "gapToAddress": "面接で補うべきギャップや不足点（2-3文。建設的に。）",
    "interviewStrategy": "このポジションの面接であなたが意識すべき戦略（3-4文）"
  }"#;
