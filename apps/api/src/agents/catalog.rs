//! Static catalog of recruiting agents.
//!
//! The catalog is compiled in and never mutated. Exactly one record carries
//! `AgentCategory::Primary`; it is the affiliate partner that always leads a
//! recommendation list.

use serde::{Deserialize, Serialize};

/// Advisor-service bucket an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AgentCategory {
    Primary,
    ItSpecialist,
    HighClass,
    General,
    YoungCareer,
}

/// A labelled figure shown on an agent card, e.g. ("求人数", "10万件+").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    #[serde(rename = "id")]
    pub identifier: &'static str,
    #[serde(rename = "type")]
    pub category: AgentCategory,
    #[serde(rename = "name")]
    pub display_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    #[serde(rename = "features")]
    pub feature_list: &'static [&'static str],
    #[serde(rename = "stats")]
    pub statistics: &'static [AgentStat],
    #[serde(rename = "bestFor")]
    pub best_for_list: &'static [&'static str],
    #[serde(rename = "cta")]
    pub call_to_action_text: &'static str,
    #[serde(rename = "affiliateUrl")]
    pub outbound_link_url: &'static str,
}

/// Returns the full catalog in display order.
pub fn catalog() -> &'static [AgentRecord] {
    AGENTS
}

/// Returns the single primary partner record, if the catalog has one.
pub fn primary_agent() -> Option<&'static AgentRecord> {
    AGENTS.iter().find(|a| a.category == AgentCategory::Primary)
}

/// Catalog records of one category, in catalog order.
pub fn agents_in(category: AgentCategory) -> impl Iterator<Item = &'static AgentRecord> {
    AGENTS.iter().filter(move |a| a.category == category)
}

static AGENTS: &[AgentRecord] = &[
    AgentRecord {
        identifier: "agent-navi",
        category: AgentCategory::Primary,
        display_name: "転職AGENT Navi",
        tagline: "約300人のアドバイザーから最適な担当者をマッチング",
        description: "求職者と転職エージェントの完全無料マッチングサービス。あなたの性格や希望に合わせて、内定実績のある約300人のキャリアアドバイザーの中から最適な担当者を紹介します。",
        feature_list: &[
            "業界最大級！求人保有100,000件以上",
            "Google評価★4.4以上の高評価",
            "相性の良いアドバイザーに出会える",
        ],
        statistics: &[
            AgentStat { label: "求人数", value: "10万件+" },
            AgentStat { label: "Google評価", value: "★4.4以上" },
        ],
        best_for_list: &["20代", "転職2回以内", "今すぐ〜3か月以内に転職したい方"],
        call_to_action_text: "無料でアドバイザーを探す",
        outbound_link_url: "https://px.a8.net/svt/ejp?a8mat=4AX1ON+CIP6HM+5BJK+5Z6WY",
    },
    AgentRecord {
        identifier: "levtech",
        category: AgentCategory::ItSpecialist,
        display_name: "レバテックキャリア",
        tagline: "ITエンジニア特化No.1",
        description: "IT・Web業界に完全特化した転職エージェント",
        feature_list: &[
            "エンジニア求人数15,000件以上",
            "元エンジニアのアドバイザーが多数",
            "年収アップ率60%以上",
        ],
        statistics: &[
            AgentStat { label: "IT求人数", value: "15,000件+" },
            AgentStat { label: "年収UP率", value: "60%以上" },
        ],
        best_for_list: &["エンジニア", "IT業界経験者", "技術力を活かしたい方"],
        call_to_action_text: "無料でIT求人を見る",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "geekly",
        category: AgentCategory::ItSpecialist,
        display_name: "Geekly（ギークリー）",
        tagline: "IT・Web・ゲーム専門",
        description: "IT/Web/ゲーム業界に特化した転職エージェント",
        feature_list: &[
            "業界専門のキャリアアドバイザー",
            "マッチング精度の高さに定評",
            "非公開求人が豊富",
        ],
        statistics: &[
            AgentStat { label: "利用者満足度", value: "85%" },
            AgentStat { label: "内定率", value: "業界トップクラス" },
        ],
        best_for_list: &["Web系エンジニア", "ゲーム業界志望", "スタートアップ志向"],
        call_to_action_text: "無料で相談する",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "bizreach",
        category: AgentCategory::HighClass,
        display_name: "ビズリーチ",
        tagline: "ハイクラス転職No.1",
        description: "年収600万円以上のハイクラス転職に特化",
        feature_list: &[
            "企業やヘッドハンターから直接スカウト",
            "年収1,000万円以上の求人多数",
            "経営層・管理職向け求人が豊富",
        ],
        statistics: &[
            AgentStat { label: "登録企業数", value: "17,000社+" },
            AgentStat { label: "スカウト数", value: "月間10万通+" },
        ],
        best_for_list: &["年収600万円以上", "マネジメント経験者", "キャリアアップ志向"],
        call_to_action_text: "無料でスカウトを受け取る",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "jac",
        category: AgentCategory::HighClass,
        display_name: "JACリクルートメント",
        tagline: "ハイクラス・外資系に強い",
        description: "管理職・専門職・外資系企業への転職に特化",
        feature_list: &[
            "外資系・グローバル企業に強い",
            "両面型コンサルティング",
            "30代-50代のキャリア支援実績豊富",
        ],
        statistics: &[
            AgentStat { label: "転職支援実績", value: "43万人+" },
            AgentStat { label: "外資系求人", value: "業界最大級" },
        ],
        best_for_list: &["外資系志望", "管理職経験者", "専門性の高い職種"],
        call_to_action_text: "無料でキャリア相談",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "recruit-agent",
        category: AgentCategory::General,
        display_name: "リクルートエージェント",
        tagline: "転職支援実績No.1",
        description: "業界最大級の求人数を誇る総合転職エージェント",
        feature_list: &[
            "非公開求人20万件以上",
            "全業界・全職種をカバー",
            "転職支援実績No.1",
        ],
        statistics: &[
            AgentStat { label: "求人数", value: "60万件+" },
            AgentStat { label: "転職支援実績", value: "No.1" },
        ],
        best_for_list: &["幅広く求人を見たい", "業界を変えたい", "初めての転職"],
        call_to_action_text: "無料で求人を探す",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "doda",
        category: AgentCategory::General,
        display_name: "doda",
        tagline: "求人数トップクラス",
        description: "転職サイトとエージェントが一体化したサービス",
        feature_list: &[
            "求人数10万件以上",
            "サイトとエージェント両方使える",
            "転職フェアなどイベントも充実",
        ],
        statistics: &[
            AgentStat { label: "求人数", value: "10万件+" },
            AgentStat { label: "利用者数", value: "700万人+" },
        ],
        best_for_list: &["自分のペースで探したい", "20-30代", "情報収集から始めたい"],
        call_to_action_text: "無料で会員登録",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "mynavi-agent",
        category: AgentCategory::YoungCareer,
        display_name: "マイナビエージェント",
        tagline: "20代・第二新卒に強い",
        description: "20代の転職サポートに定評のあるエージェント",
        feature_list: &[
            "20代の転職支援に特化",
            "初めての転職でも安心のサポート",
            "中小企業の優良求人も豊富",
        ],
        statistics: &[
            AgentStat { label: "20代利用率", value: "業界トップ" },
            AgentStat { label: "定着率", value: "97.5%" },
        ],
        best_for_list: &["20代", "第二新卒", "初めての転職"],
        call_to_action_text: "無料でキャリア相談",
        outbound_link_url: "#",
    },
    AgentRecord {
        identifier: "workport",
        category: AgentCategory::YoungCareer,
        display_name: "ワークポート",
        tagline: "未経験からのIT転職に強い",
        description: "IT業界への転職・未経験転職に強いエージェント",
        feature_list: &[
            "IT未経験からの転職実績豊富",
            "スピーディーな対応",
            "転職決定人数が多い",
        ],
        statistics: &[
            AgentStat { label: "転職決定人数", value: "業界トップクラス" },
            AgentStat { label: "未経験IT転職", value: "実績豊富" },
        ],
        best_for_list: &["IT業界未経験", "キャリアチェンジ", "20-30代"],
        call_to_action_text: "無料で相談する",
        outbound_link_url: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exactly_one_primary() {
        let primaries = catalog()
            .iter()
            .filter(|a| a.category == AgentCategory::Primary)
            .count();
        assert_eq!(primaries, 1);
        assert_eq!(primary_agent().map(|a| a.identifier), Some("agent-navi"));
    }

    #[test]
    fn test_identifiers_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|a| a.identifier).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_agents_in_preserves_catalog_order() {
        let ids: Vec<_> = agents_in(AgentCategory::General)
            .map(|a| a.identifier)
            .collect();
        assert_eq!(ids, vec!["recruit-agent", "doda"]);
    }

    #[test]
    fn test_record_serializes_with_display_keys() {
        let json = serde_json::to_value(primary_agent().unwrap()).unwrap();
        assert_eq!(json["id"], "agent-navi");
        assert_eq!(json["type"], "primary");
        assert_eq!(json["bestFor"][0], "20代");
        assert_eq!(json["stats"][1]["label"], "Google評価");
        assert!(json.get("affiliateUrl").is_some());
    }

    #[test]
    fn test_category_wire_names() {
        let c: AgentCategory = serde_json::from_str(r#""youngCareer""#).unwrap();
        assert_eq!(c, AgentCategory::YoungCareer);
        assert_eq!(
            serde_json::to_string(&AgentCategory::ItSpecialist).unwrap(),
            r#""itSpecialist""#
        );
    }
}
