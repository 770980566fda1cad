use axum::{
    extract::{Query, State},
    response::Json,
};
use serde_json::Value;
use crate::error::ApiError;
use crate::state::AppState;

const PLAYER_ID_PARAM: &str = "player_id";

/// Pick the single `player_id` value out of the query string.
/// A repeated parameter cannot be a number.
pub fn player_id_param(params: &[(String, String)]) -> Result<Option<&str>, ApiError> {
    let mut values = params
        .iter()
        .filter(|(key, _)| key == PLAYER_ID_PARAM)
        .map(|(_, value)| value.as_str());

    match (values.next(), values.next()) {
        (None, _) => Ok(None),
        (Some(value), None) => Ok(Some(value)),
        (Some(_), Some(_)) => Err(ApiError::InvalidPlayerId),
    }
}

/// Convert the raw query value to a number the way a browser's `Number()`
/// does: surrounding whitespace is ignored and a blank value is zero,
/// `0x`/`0o`/`0b` prefixes are integers, `Infinity` is the only
/// spelled-out number. An empty value counts as not provided.
pub fn parse_player_id(raw: Option<&str>) -> Result<f64, ApiError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ApiError::MissingPlayerId),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u128::from_str_radix(&trimmed[2..], radix)
            .map(|id| id as f64)
            .map_err(|_| ApiError::InvalidPlayerId);
    }

    // Rust also accepts "inf" and "nan", which are not numbers here.
    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return Err(ApiError::InvalidPlayerId);
    }

    trimmed.parse::<f64>().map_err(|_| ApiError::InvalidPlayerId)
}

// GET /api/players?player_id=237 - Every season row for a player, as stored
pub async fn get_players(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let player_id = parse_player_id(player_id_param(&params)?)?;

    let players: Vec<Value> = state
        .store
        .players_by_id(player_id)
        .into_iter()
        .cloned()
        .collect();

    if players.is_empty() {
        tracing::debug!(player_id, "No records for player");
        return Err(ApiError::PlayerNotFound);
    }

    Ok(Json(players))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_or_empty_id_is_missing() {
        assert_eq!(parse_player_id(None), Err(ApiError::MissingPlayerId));
        assert_eq!(parse_player_id(Some("")), Err(ApiError::MissingPlayerId));
    }

    #[test]
    fn blank_id_converts_to_zero() {
        assert_eq!(parse_player_id(Some("   ")), Ok(0.0));
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        for raw in ["abc", "12abc", "NaN", "nan", "inf", "infinity", "0x", "0xzz", "1e", "."] {
            assert_eq!(parse_player_id(Some(raw)), Err(ApiError::InvalidPlayerId), "{raw}");
        }
    }

    #[test]
    fn numeric_forms_are_accepted() {
        assert_eq!(parse_player_id(Some("237")), Ok(237.0));
        assert_eq!(parse_player_id(Some(" 237 ")), Ok(237.0));
        assert_eq!(parse_player_id(Some("237.0")), Ok(237.0));
        assert_eq!(parse_player_id(Some("2.37e2")), Ok(237.0));
        assert_eq!(parse_player_id(Some("0")), Ok(0.0));
        assert_eq!(parse_player_id(Some("0x10")), Ok(16.0));
        assert_eq!(parse_player_id(Some("0b101")), Ok(5.0));
        assert_eq!(parse_player_id(Some("Infinity")), Ok(f64::INFINITY));
    }

    #[test]
    fn repeated_param_is_invalid() {
        let params = query(&[("player_id", "1"), ("player_id", "2")]);
        assert_eq!(player_id_param(&params), Err(ApiError::InvalidPlayerId));
    }

    #[test]
    fn single_param_is_picked_out() {
        let params = query(&[("other", "x"), ("player_id", "237")]);
        assert_eq!(player_id_param(&params), Ok(Some("237")));
        assert_eq!(player_id_param(&query(&[("other", "x")])), Ok(None));
    }
}
