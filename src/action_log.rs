use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Action phase - whether the action is starting or finishing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ActionPhase {
    Start,
    Finish,
}

/// Editor operations that touch the map
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum EditorAction {
    /// Paint a tile type at (col, row)
    PaintTile { col: i32, row: i32, type_id: i32 },
    /// Overwrite tiles with a type (fill-all or fill-remaining)
    FillMap { type_id: i32, replace_all: bool },
    /// Place the start marker at (col, row)
    PlaceStart { col: i32, row: i32 },
    /// Place the end marker at (col, row)
    PlaceEnd { col: i32, row: i32 },
    /// Resize the grid to (cols, rows)
    ResizeMap { cols: i32, rows: i32 },
    /// Save the map file
    SaveMap,
    /// Load the map file
    LoadMap,
}

/// Logged action with timestamp and phase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since start
    pub timestamp_ms: u64,
    /// The action
    pub action: EditorAction,
    /// Whether this is the start or finish of the action
    pub phase: ActionPhase,
}

/// Action logger
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log an action with current timestamp and phase
    pub fn log(&mut self, action: EditorAction, phase: ActionPhase) {
        let elapsed = self.start_time.elapsed();
        let timestamp_ms = elapsed.as_millis() as u64;

        self.actions.push(LoggedAction {
            timestamp_ms,
            action,
            phase,
        });
    }

    /// Log the start of an action
    pub fn log_start(&mut self, action: EditorAction) {
        self.log(action, ActionPhase::Start);
    }

    /// Log the finish of an action
    pub fn log_finish(&mut self, action: EditorAction) {
        self.log(action, ActionPhase::Finish);
    }

    /// Get all logged actions
    pub fn get_actions(&self) -> &Vec<LoggedAction> {
        &self.actions
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.actions)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Action Log ({} events) ===", self.actions.len());
        for (i, logged) in self.actions.iter().enumerate() {
            let phase_str = match logged.phase {
                ActionPhase::Start => "START ",
                ActionPhase::Finish => "FINISH",
            };
            println!("[{:6}ms] #{:3} {} {:?}", logged.timestamp_ms, i + 1, phase_str, logged.action);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut paints = 0;
        let mut fills = 0;
        let mut starts_placed = 0;
        let mut ends_placed = 0;
        let mut saves = 0;
        let mut loads = 0;

        // Only count finish events to get actual completed action counts
        for logged in &self.actions {
            if matches!(logged.phase, ActionPhase::Finish) {
                match &logged.action {
                    EditorAction::PaintTile { .. } => paints += 1,
                    EditorAction::FillMap { .. } => fills += 1,
                    EditorAction::PlaceStart { .. } => starts_placed += 1,
                    EditorAction::PlaceEnd { .. } => ends_placed += 1,
                    EditorAction::SaveMap => saves += 1,
                    EditorAction::LoadMap => loads += 1,
                    _ => {}
                }
            }
        }

        let duration = if let Some(last) = self.actions.last() {
            last.timestamp_ms
        } else {
            0
        };

        format!(
            "Session Duration: {}ms\n\
             Total Events: {}\n\
             Tiles Painted: {}, Fills: {}\n\
             Markers: {} start placements, {} end placements\n\
             Files: {} saved, {} loaded",
            duration,
            self.actions.len(),
            paints,
            fills,
            starts_placed,
            ends_placed,
            saves,
            loads
        )
    }
}
