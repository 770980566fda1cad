#![allow(dead_code)]

use serde_json::{Map, Value};

const SEASON_STATS: &str = r#"{
    "pos": "SF",
    "g": 45, "gs": 45, "mp": 1504.0,
    "fg": 422.0, "fga": 855.0, "fg_percent": 0.494,
    "x3p": 97.0, "x3pa": 279.0, "x3p_percent": 0.348,
    "x2p": 325.0, "x2pa": 576.0, "x2p_percent": 0.564,
    "e_fg_percent": 0.55,
    "ft": 0.0, "fta": 0.0, "ft_percent": null,
    "orb": 28.0, "drb": 318.0, "trb": 346.0,
    "ast": 350.0, "stl": 50.0, "blk": 25.0, "tov": 168.0, "pf": 70.0, "pts": 1126.0,
    "avg_dist_fga": 14.1,
    "percent_fga_from_x2p_range": 0.674,
    "percent_fga_from_x0_3_range": 0.31,
    "percent_fga_from_x3_10_range": 0.16,
    "percent_fga_from_x10_16_range": 0.09,
    "percent_fga_from_x16_3p_range": 0.11,
    "percent_fga_from_x3p_range": 0.326,
    "fg_percent_from_x2p_range": 0.564,
    "fg_percent_from_x0_3_range": 0.74,
    "fg_percent_from_x3_10_range": 0.4,
    "fg_percent_from_x10_16_range": 0.42,
    "fg_percent_from_x16_3p_range": 0.35,
    "fg_percent_from_x3p_range": 0.348,
    "percent_assisted_x2p_fg": 0.3,
    "percent_assisted_x3p_fg": 0.59,
    "percent_dunks_of_fga": 0.05,
    "num_of_dunks": 43.0,
    "percent_corner_3s_of_3pa": 0.08,
    "corner_3_point_percent": null,
    "num_heaves_attempted": 2.0,
    "num_heaves_made": 0.0
}"#;

pub fn record_json(player_id: i64, player: &str, season: i64, tm: &str) -> Value {
    let mut row: Map<String, Value> =
        serde_json::from_str(SEASON_STATS).expect("season stats fixture is valid JSON");
    row.insert("seas_id".into(), (season * 1000 + player_id).into());
    row.insert("season".into(), season.into());
    row.insert("player_id".into(), player_id.into());
    row.insert("player".into(), player.into());
    row.insert("age".into(), (season - 1984).into());
    row.insert("tm".into(), tm.into());
    Value::Object(row)
}

/// LeBron James in two seasons plus one unrelated player, in file order.
pub fn sample_rows() -> Vec<Value> {
    vec![
        record_json(237, "LeBron James", 2020, "LAL"),
        record_json(1000, "Stephen Curry", 2020, "GSW"),
        record_json(237, "LeBron James", 2021, "LAL"),
    ]
}
