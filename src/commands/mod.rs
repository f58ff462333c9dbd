//! Command handlers for the stats tracker CLI.

use crate::cli::{Commands, CommonArgs};
use crate::client::StatsTrackingClient;
use crate::error::{Result, StatsError};
use crate::BACKEND_URL_ENV_VAR;

/// Resolve the backend base URL from the flag or environment variable.
pub fn resolve_backend_url(backend_url: Option<String>) -> Result<String> {
    backend_url
        .or_else(|| std::env::var(BACKEND_URL_ENV_VAR).ok())
        .ok_or_else(|| StatsError::MissingBackendUrl {
            env_var: BACKEND_URL_ENV_VAR.to_string(),
        })
}

fn client_for(common: &CommonArgs) -> Result<StatsTrackingClient> {
    let base_url = resolve_backend_url(common.backend_url.clone())?;
    StatsTrackingClient::new(base_url)
}

/// Dispatch one parsed subcommand.
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Sports { common } => {
            let client = client_for(&common)?;
            let sports = client.sports().await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&sports)?);
            } else {
                for sport in &sports {
                    println!("{}  {}", sport.id, sport.name);
                }
            }
        }

        Commands::Teams { common, sport } => {
            let client = client_for(&common)?;
            let teams = client.teams_by_sport(&sport).await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&teams)?);
            } else {
                for team in &teams {
                    println!("{}  {}", team.id, team.name);
                }
            }
        }

        Commands::AvailableStats { common, team, sport } => {
            let client = client_for(&common)?;
            let stats = client.available_stats_for_team(&team, &sport).await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for stat in &stats {
                    println!("{stat}");
                }
            }
        }

        Commands::TeamStats {
            common,
            team,
            sport,
            stats,
        } => {
            let client = client_for(&common)?;
            let filter = (!stats.is_empty()).then_some(stats.as_slice());
            let data = client.team_stats(&team, &sport, filter).await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                for (stat, value) in &data {
                    println!("{stat}: {value}");
                }
            }
        }

        Commands::TeamDetails { common, team_id } => {
            let client = client_for(&common)?;
            let details = client.team_details(&team_id).await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                println!("{} ({})", details.teamname, details.sport);
            }
        }

        Commands::Tracked { common, user, sport } => {
            let client = client_for(&common)?;
            let selection = client.user_stat_selection(&user, &sport).await;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&selection)?);
            } else {
                match selection {
                    Some(selection) => {
                        for stat in &selection.stats {
                            println!("{stat}");
                        }
                        if selection.auto_created {
                            println!("(created from sport defaults)");
                        }
                    }
                    None => println!("no tracked stats for {user} in {sport}"),
                }
            }
        }

        Commands::Track {
            common,
            user,
            sport,
            stat,
        } => {
            let client = client_for(&common)?;
            let tracked = client.add_stat(&user, &sport, &stat).await?;
            println!("tracking {tracked}");
        }

        Commands::Untrack {
            common,
            user,
            sport,
            stat,
        } => {
            let client = client_for(&common)?;
            let removed = client.remove_stat(&user, &sport, &stat).await?;
            println!("stopped tracking {removed}");
        }

        Commands::Reset { common, user, sport } => {
            let client = client_for(&common)?;
            let outcome = client.remove_stat_collection(&user, &sport).await?;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("removed {} stat item(s)", outcome.removed_count);
                for error in &outcome.errors {
                    eprintln!("warning: {error}");
                }
            }
        }

        Commands::Cleanup { common, user } => {
            let client = client_for(&common)?;
            let outcome = client.remove_all_collections(&user).await?;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("removed {} collection(s)", outcome.removed_count);
                for error in &outcome.errors {
                    eprintln!("warning: {error}");
                }
            }
        }

        Commands::AddKeyStat { common, sport, stat } => {
            let client = client_for(&common)?;
            let result = client.add_key_stat(&sport, &stat).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::RemoveKeyStat { common, sport, stat } => {
            let client = client_for(&common)?;
            let result = client.remove_key_stat(&sport, &stat).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
