// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first
    app.commit_out_path();

    if app.notes.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let path = app.state.options.export.out_path().to_path_buf();
    logf!("Export: Begin notes={} → {}", app.notes.len(), path.display());

    let status_msg = match file::write_notes(&path, &app.notes) {
        Ok(p) => format!("Exported {} note(s) to {}", app.notes.len(), p.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.save_state();
    app.status(status_msg);
}
