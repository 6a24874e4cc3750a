use super::*;

pub(super) fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    // Restart is only offered once the dish is on screen
    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
        && state.recommendation().is_some()
    {
        info!("restarting quiz");
        state.restart();
    }
}
