use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// One player's statistics for one season with one team.
///
/// This is the typed view of a row from the data file. Every column is
/// optional, ids accept integral floats (`237.0`), and keys that are not
/// modelled here are kept in `extra`.
/// Percentages are `None` when the matching attempt count is zero.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlayerSeasonRecord {
    #[serde(default, deserialize_with = "integer_like")]
    pub seas_id: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub season: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub player_id: Option<i64>,
    pub player: Option<String>,
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "integer_like")]
    pub age: Option<i64>,
    pub tm: Option<String>,

    // Games and minutes
    #[serde(default, deserialize_with = "integer_like")]
    pub g: Option<i64>,
    #[serde(default, deserialize_with = "integer_like")]
    pub gs: Option<i64>,
    pub mp: Option<f64>,

    // Shooting
    pub fg: Option<f64>,
    pub fga: Option<f64>,
    pub fg_percent: Option<f64>,
    pub x3p: Option<f64>,
    pub x3pa: Option<f64>,
    pub x3p_percent: Option<f64>,
    pub x2p: Option<f64>,
    pub x2pa: Option<f64>,
    pub x2p_percent: Option<f64>,
    pub e_fg_percent: Option<f64>,
    pub ft: Option<f64>,
    pub fta: Option<f64>,
    pub ft_percent: Option<f64>,

    // Counting stats
    pub orb: Option<f64>,
    pub drb: Option<f64>,
    pub trb: Option<f64>,
    pub ast: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub tov: Option<f64>,
    pub pf: Option<f64>,
    pub pts: Option<f64>,

    // Shot distribution
    pub avg_dist_fga: Option<f64>,
    pub percent_fga_from_x2p_range: Option<f64>,
    pub percent_fga_from_x0_3_range: Option<f64>,
    pub percent_fga_from_x3_10_range: Option<f64>,
    pub percent_fga_from_x10_16_range: Option<f64>,
    pub percent_fga_from_x16_3p_range: Option<f64>,
    pub percent_fga_from_x3p_range: Option<f64>,
    pub fg_percent_from_x2p_range: Option<f64>,
    pub fg_percent_from_x0_3_range: Option<f64>,
    pub fg_percent_from_x3_10_range: Option<f64>,
    pub fg_percent_from_x10_16_range: Option<f64>,
    pub fg_percent_from_x16_3p_range: Option<f64>,
    pub fg_percent_from_x3p_range: Option<f64>,
    pub percent_assisted_x2p_fg: Option<f64>,
    pub percent_assisted_x3p_fg: Option<f64>,
    pub percent_dunks_of_fga: Option<f64>,
    pub num_of_dunks: Option<f64>,
    pub percent_corner_3s_of_3pa: Option<f64>,
    pub corner_3_point_percent: Option<f64>,
    pub num_heaves_attempted: Option<f64>,
    pub num_heaves_made: Option<f64>,

    /// Columns not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Integers may be written as integral floats in the data file.
fn integer_like<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_i64().or_else(|| {
            v.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        })
    }))
}

/// Player id to display name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerMap {
    pub player_id: i64,
    pub player: String,
}

impl PlayerMap {
    /// Returns `None` for records missing either the id or the name.
    pub fn from_record(record: &PlayerSeasonRecord) -> Option<PlayerMap> {
        Some(PlayerMap {
            player_id: record.player_id?,
            player: record.player.clone()?,
        })
    }
}

/// Team display metadata used by the front end
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMap {
    pub abbreviation: String,
    pub team_name: String,
    pub primary_color: String,
    pub secondary_color: String,
}

/// Team abbreviation codes as they appear in the `tm` column.
///
/// `TOT` marks the combined row for a player traded mid-season.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamsShort {
    Atl,
    Bos,
    Brk,
    Cha,
    Chi,
    Cho,
    Cle,
    Dal,
    Den,
    Det,
    Gsw,
    Hou,
    Ind,
    Lac,
    Lal,
    Mem,
    Mia,
    Mil,
    Min,
    Nop,
    Noh,
    Nyk,
    Okc,
    Orl,
    Phi,
    Pho,
    Por,
    Sas,
    Sac,
    Tor,
    Tot,
    Uta,
    Was,
}

impl TeamsShort {
    pub const ALL: [TeamsShort; 33] = [
        TeamsShort::Atl,
        TeamsShort::Bos,
        TeamsShort::Brk,
        TeamsShort::Cha,
        TeamsShort::Chi,
        TeamsShort::Cho,
        TeamsShort::Cle,
        TeamsShort::Dal,
        TeamsShort::Den,
        TeamsShort::Det,
        TeamsShort::Gsw,
        TeamsShort::Hou,
        TeamsShort::Ind,
        TeamsShort::Lac,
        TeamsShort::Lal,
        TeamsShort::Mem,
        TeamsShort::Mia,
        TeamsShort::Mil,
        TeamsShort::Min,
        TeamsShort::Nop,
        TeamsShort::Noh,
        TeamsShort::Nyk,
        TeamsShort::Okc,
        TeamsShort::Orl,
        TeamsShort::Phi,
        TeamsShort::Pho,
        TeamsShort::Por,
        TeamsShort::Sas,
        TeamsShort::Sac,
        TeamsShort::Tor,
        TeamsShort::Tot,
        TeamsShort::Uta,
        TeamsShort::Was,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamsShort::Atl => "ATL",
            TeamsShort::Bos => "BOS",
            TeamsShort::Brk => "BRK",
            TeamsShort::Cha => "CHA",
            TeamsShort::Chi => "CHI",
            TeamsShort::Cho => "CHO",
            TeamsShort::Cle => "CLE",
            TeamsShort::Dal => "DAL",
            TeamsShort::Den => "DEN",
            TeamsShort::Det => "DET",
            TeamsShort::Gsw => "GSW",
            TeamsShort::Hou => "HOU",
            TeamsShort::Ind => "IND",
            TeamsShort::Lac => "LAC",
            TeamsShort::Lal => "LAL",
            TeamsShort::Mem => "MEM",
            TeamsShort::Mia => "MIA",
            TeamsShort::Mil => "MIL",
            TeamsShort::Min => "MIN",
            TeamsShort::Nop => "NOP",
            TeamsShort::Noh => "NOH",
            TeamsShort::Nyk => "NYK",
            TeamsShort::Okc => "OKC",
            TeamsShort::Orl => "ORL",
            TeamsShort::Phi => "PHI",
            TeamsShort::Pho => "PHO",
            TeamsShort::Por => "POR",
            TeamsShort::Sas => "SAS",
            TeamsShort::Sac => "SAC",
            TeamsShort::Tor => "TOR",
            TeamsShort::Tot => "TOT",
            TeamsShort::Uta => "UTA",
            TeamsShort::Was => "WAS",
        }
    }
}

impl fmt::Display for TeamsShort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown team abbreviation: {0}")]
pub struct UnknownTeam(pub String);

impl FromStr for TeamsShort {
    type Err = UnknownTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamsShort::ALL
            .iter()
            .copied()
            .find(|team| team.as_str() == s)
            .ok_or_else(|| UnknownTeam(s.to_string()))
    }
}
