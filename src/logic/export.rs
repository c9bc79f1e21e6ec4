//! CSV export of a standings table, one column layout per profile.

use crate::logic::profile::ProfileName;
use crate::logic::standings::StandingRow;

fn header(profile: ProfileName) -> &'static [&'static str] {
    match profile {
        ProfileName::NetOnly => &[
            "Rank",
            "Player",
            "Games Played",
            "Rubbers Played",
            "Towers Won",
            "Towers Lost",
            "Net",
        ],
        ProfileName::FullNet => &[
            "Rank",
            "Player",
            "Played",
            "Games Net",
            "Rubbers Played",
            "Rubbers Net",
            "Towers Net",
            "Towers Won",
            "Towers Lost",
        ],
        ProfileName::WinsFirst => &[
            "Rank",
            "Player",
            "Played",
            "Games Won",
            "Rubbers Played",
            "Rubbers Won",
            "Towers Won",
            "Towers Lost",
        ],
    }
}

fn record(row: &StandingRow, profile: ProfileName) -> Vec<String> {
    let s = &row.stats;
    let played = s.games_won + s.games_lost;
    let rubbers = s.rubbers_won + s.rubbers_lost;
    let mut fields = vec![row.rank.to_string(), row.display_name.clone()];
    let rest = match profile {
        ProfileName::NetOnly => vec![
            s.games_played.to_string(),
            s.rubbers_played.to_string(),
            s.towers_won.to_string(),
            s.towers_lost.to_string(),
            s.towers_net.to_string(),
        ],
        ProfileName::FullNet => vec![
            played.to_string(),
            s.games_net.to_string(),
            rubbers.to_string(),
            s.rubbers_net.to_string(),
            s.towers_net.to_string(),
            s.towers_won.to_string(),
            s.towers_lost.to_string(),
        ],
        ProfileName::WinsFirst => vec![
            played.to_string(),
            s.games_won.to_string(),
            rubbers.to_string(),
            s.rubbers_won.to_string(),
            s.towers_won.to_string(),
            s.towers_lost.to_string(),
        ],
    };
    fields.extend(rest);
    fields
}

/// Write the table as CSV (header row first) with the profile's column layout.
pub fn standings_csv(rows: &[StandingRow], profile: ProfileName) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(header(profile))?;
    for row in rows {
        wtr.write_record(record(row, profile))?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
