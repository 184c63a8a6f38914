//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

use super::config::{SimConfig, SimTarget};

/// Counters for one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
    pub fled: u32,
    /// Battles abandoned at the tick limit
    pub stuck: u32,
    pub total_ticks: u64,
    pub routes_cleared: u32,
    pub final_level: u32,
    pub gold: u64,
    pub raid_damage: u64,
    pub raid_tokens: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub target: SimTarget,
    pub num_runs: u32,
    pub total_battles: u64,
    pub win_rate: f64,
    pub loss_rate: f64,
    pub flee_rate: f64,
    pub stuck_battles: u64,
    pub avg_ticks_per_battle: f64,
    pub clear_rate: f64,
    pub avg_final_level: f64,
    pub avg_gold: f64,
    pub avg_raid_damage: f64,
    pub avg_raid_tokens: f64,
    pub level_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let per_run = num_runs.max(1) as f64;
        let total_battles: u64 = runs.iter().map(|r| r.battles as u64).sum();
        let per_battle = total_battles.max(1) as f64;

        let sum = |f: fn(&RunStats) -> u64| runs.iter().map(f).sum::<u64>();
        let wins = sum(|r| r.wins as u64);
        let losses = sum(|r| r.losses as u64);
        let fled = sum(|r| r.fled as u64);

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            target: config.target.clone(),
            num_runs,
            total_battles,
            win_rate: wins as f64 / per_battle,
            loss_rate: losses as f64 / per_battle,
            flee_rate: fled as f64 / per_battle,
            stuck_battles: sum(|r| r.stuck as u64),
            avg_ticks_per_battle: sum(|r| r.total_ticks) as f64 / per_battle,
            clear_rate: runs.iter().filter(|r| r.routes_cleared > 0).count() as f64 / per_run,
            avg_final_level: sum(|r| r.final_level as u64) as f64 / per_run,
            avg_gold: sum(|r| r.gold) as f64 / per_run,
            avg_raid_damage: sum(|r| r.raid_damage) as f64 / per_run,
            avg_raid_tokens: sum(|r| r.raid_tokens) as f64 / per_run,
            level_distribution,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        let target = match &self.target {
            SimTarget::Arena => "arena".to_string(),
            SimTarget::Route(id) => format!("route {}", id),
            SimTarget::Raid(id) => format!("raid {}", id),
        };
        report.push_str(&format!(
            "  Target: {}   Runs: {}   Battles: {}\n\n",
            target, self.num_runs, self.total_battles
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:        {:>5.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!("  Loss Rate:       {:>5.1}%\n", self.loss_rate * 100.0));
        report.push_str(&format!("  Flee/Timeout:    {:>5.1}%\n", self.flee_rate * 100.0));
        report.push_str(&format!("  Avg Ticks:       {:.1}\n", self.avg_ticks_per_battle));
        if self.stuck_battles > 0 {
            report.push_str(&format!("  Stuck Battles:   {}\n", self.stuck_battles));
        }
        report.push('\n');

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        if matches!(self.target, SimTarget::Route(_)) {
            report.push_str(&format!("  Route Cleared:   {:>5.1}%\n", self.clear_rate * 100.0));
        }
        report.push_str(&format!("  Avg Final Level: {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Gold:        {:.1}\n", self.avg_gold));
        for (level, count) in &self.level_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("    Lv {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        if matches!(self.target, SimTarget::Raid(_)) {
            report.push_str("── RAID ─────────────────────────────────────────────────────────\n");
            report.push_str(&format!("  Avg Damage:      {:.1}\n", self.avg_raid_damage));
            report.push_str(&format!("  Avg Tokens:      {:.1}\n\n", self.avg_raid_tokens));
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
