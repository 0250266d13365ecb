use serde::{Deserialize, Serialize};

/// All trials for one starting-land configuration. `damage[trial][turn]`
/// holds the per-turn samples of one trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandConfigResults {
    pub lands: u32,
    pub damage: Vec<Vec<u32>>,
    /// Trials aborted on an engine fault
    pub failed_trials: usize,
    /// Action-cap trips summed across the surviving trials
    pub cap_exhaustions: u32,
}

/// The full sweep tensor handed to aggregation and persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResults {
    pub turns: u32,
    pub trials: usize,
    pub land_for_turn: bool,
    pub seed: u64,
    pub configs: Vec<LandConfigResults>,
}

impl LandConfigResults {
    /// Mean damage per turn across trials
    pub fn mean_by_turn(&self) -> Vec<f64> {
        let turns = match self.damage.first() {
            Some(row) => row.len(),
            None => return Vec::new(),
        };
        let mut means = vec![0.0; turns];
        for row in &self.damage {
            for (turn, &d) in row.iter().enumerate() {
                means[turn] += d as f64;
            }
        }
        for m in &mut means {
            *m /= self.damage.len() as f64;
        }
        means
    }

    /// Median damage per turn across trials
    pub fn median_by_turn(&self) -> Vec<f64> {
        let turns = match self.damage.first() {
            Some(row) => row.len(),
            None => return Vec::new(),
        };
        (0..turns)
            .map(|turn| {
                let mut column: Vec<u32> = self.damage.iter().map(|row| row[turn]).collect();
                column.sort_unstable();
                let n = column.len();
                if n % 2 == 1 {
                    column[n / 2] as f64
                } else {
                    (column[n / 2 - 1] + column[n / 2]) as f64 / 2.0
                }
            })
            .collect()
    }

    /// Trial counts per damage value for one turn, indexed by damage
    /// (values above `max_damage` are clamped into the last bucket)
    pub fn histogram(&self, turn: usize, max_damage: u32) -> Vec<usize> {
        let mut counts = vec![0; max_damage as usize + 1];
        for row in &self.damage {
            if let Some(&d) = row.get(turn) {
                counts[(d.min(max_damage)) as usize] += 1;
            }
        }
        counts
    }
}
