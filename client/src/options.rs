use anyhow::Result;
use common::{Config, ConfigLoader};
use connect4::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub show_board: bool,
    pub json: bool,
    pub player_1_name: String,
    pub player_2_name: String,
}

impl ClientOptions {
    pub fn name_of(&self, player: PlayerId) -> &str {
        match player {
            PlayerId::Player1 => &self.player_1_name,
            PlayerId::Player2 => &self.player_2_name,
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            show_board: true,
            json: false,
            player_1_name: PlayerId::Player1.to_string(),
            player_2_name: PlayerId::Player2.to_string(),
        }
    }
}

impl Config for ClientOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            show_board: config
                .get("show_board")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.show_board),
            json: config
                .get("json")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.json),
            player_1_name: config
                .get("player_1_name")
                .and_then(|v| v.as_string())
                .unwrap_or(defaults.player_1_name),
            player_2_name: config
                .get("player_2_name")
                .and_then(|v| v.as_string())
                .unwrap_or(defaults.player_2_name),
        })
    }
}
