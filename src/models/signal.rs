use {
    crate::config::SniperConfig,
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

/// Textual verdict of the proximity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SignalKind {
    #[strum(to_string = "Suporte + RSI Baixo (Oportunidade)")]
    SupportOversold,
    #[strum(to_string = "Suporte")]
    Support,
    #[strum(to_string = "Resistência + RSI Alto (Perigo)")]
    ResistanceOverbought,
    #[strum(to_string = "Resistência")]
    Resistance,
    #[strum(to_string = "Neutro")]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ColorBand {
    Red,
    Yellow,
    Green,
}

impl ColorBand {
    pub fn from_score(score: i32, config: &SniperConfig) -> Self {
        if score < config.scoring.red_below {
            Self::Red
        } else if score > config.scoring.green_above {
            Self::Green
        } else {
            Self::Yellow
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Red => "🔴",
            Self::Yellow => "🟡",
            Self::Green => "🟢",
        }
    }
}

/// Latest-bar verdict for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Last close.
    pub price: f64,
    pub rsi: Option<f64>,
    pub signal: SignalKind,
    pub score: i32,
    pub band: ColorBand,
}

impl ScoreRecord {
    /// Signal text prefixed with the colour indicator, e.g. `🟢 Suporte`.
    pub fn signal_label(&self) -> String {
        format!("{} {}", self.band.emoji(), self.signal)
    }

    pub fn price_text(&self) -> String {
        format!("{:.2}", self.price)
    }

    pub fn rsi_text(&self) -> String {
        self.rsi
            .map(|v| format!("{:.0}", v))
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SNIPER;

    #[test]
    fn bands_split_at_40_and_60() {
        assert_eq!(ColorBand::from_score(20, &SNIPER), ColorBand::Red);
        assert_eq!(ColorBand::from_score(39, &SNIPER), ColorBand::Red);
        assert_eq!(ColorBand::from_score(40, &SNIPER), ColorBand::Yellow);
        assert_eq!(ColorBand::from_score(60, &SNIPER), ColorBand::Yellow);
        assert_eq!(ColorBand::from_score(61, &SNIPER), ColorBand::Green);
    }

    #[test]
    fn labels_render_like_the_table() {
        let record = ScoreRecord {
            price: 64_123.456,
            rsi: Some(27.6),
            signal: SignalKind::SupportOversold,
            score: 80,
            band: ColorBand::Green,
        };
        assert_eq!(record.price_text(), "64123.46");
        assert_eq!(record.rsi_text(), "28");
        assert_eq!(
            record.signal_label(),
            "🟢 Suporte + RSI Baixo (Oportunidade)"
        );
    }
}
