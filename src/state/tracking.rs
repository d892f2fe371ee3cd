//! Order progress and delivery estimate

use chrono::{Datelike, NaiveDate};

/// A step of the order lifecycle shown in the progress tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub icon: &'static str,
    pub label: &'static str,
}

/// The fixed stages, in order
pub const STAGES: [Stage; 3] = [
    Stage {
        icon: "📦",
        label: "Pedido realizado",
    },
    Stage {
        icon: "🚚",
        label: "Em trânsito",
    },
    Stage {
        icon: "✔",
        label: "Entregue",
    },
];

/// Stage highlighted when nothing supplies the real order status
pub const DEFAULT_CURRENT_STAGE: usize = 1;

/// Which stages are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderProgress {
    current_stage: usize,
}

impl Default for OrderProgress {
    fn default() -> Self {
        Self {
            current_stage: DEFAULT_CURRENT_STAGE,
        }
    }
}

impl OrderProgress {
    /// Build from an externally supplied stage index, clamped to the last stage
    pub fn new(current_stage: usize) -> Self {
        Self {
            current_stage: current_stage.min(STAGES.len() - 1),
        }
    }

    pub fn current_stage(&self) -> usize {
        self.current_stage
    }

    pub fn stages(&self) -> &'static [Stage] {
        &STAGES
    }

    /// Stages up to and including the current one are completed
    pub fn is_completed(&self, index: usize) -> bool {
        index <= self.current_stage
    }

    /// Whether the connector after stage `index` is filled.
    /// Returns `None` for the last stage, which has no connector.
    pub fn connector_filled(&self, index: usize) -> Option<bool> {
        if index + 1 >= STAGES.len() {
            None
        } else {
            Some(index < self.current_stage)
        }
    }
}

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Estimated delivery date shown in the delivery panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryEstimate {
    pub date: NaiveDate,
}

impl Default for DeliveryEstimate {
    fn default() -> Self {
        Self {
            date: default_delivery_date(),
        }
    }
}

pub fn default_delivery_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or_default()
}

impl DeliveryEstimate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Long Portuguese form, e.g. "15 de junho de 2023"
    pub fn display_date(&self) -> String {
        let month = MONTHS_PT[self.date.month0() as usize];
        format!("{} de {} de {}", self.date.day(), month, self.date.year())
    }
}
