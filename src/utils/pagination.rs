use crate::utils::error::{AppError, AppResult};
use crossterm::terminal::size;

/// Terminal size as (rows, columns)
pub fn get_terminal_size() -> AppResult<(u16, u16)> {
    size()
        .map(|(width, height)| (height, width))
        .map_err(|e| AppError::Terminal(format!("Failed to get terminal size: {}", e)))
}

/// Page output that would take more than 2/3 of the terminal
pub fn should_paginate(content: &str, terminal_height: u16) -> bool {
    let line_count = content.lines().count();
    line_count > usize::from(terminal_height) * 2 / 3
}

/// Show static text in the minus pager
pub fn paginate_static_content(content: &str) -> AppResult<()> {
    tracing::debug!(lines = content.lines().count(), "Paging output");

    let pager = minus::Pager::new();
    pager
        .push_str(content)
        .map_err(|e| AppError::System(format!("Failed to push content to pager: {}", e)))?;

    if let Err(e) = minus::page_all(pager) {
        // Quitting the pager with Ctrl-C is not an error
        if e.to_string().to_lowercase().contains("abort") {
            return Ok(());
        }
        return Err(AppError::System(format!("Failed to run pager: {}", e)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_paginate_threshold() {
        let content = vec!["line"; 20].join("\n");
        assert!(!should_paginate(&content, 30));
        assert!(should_paginate(&content, 29));
        assert!(should_paginate(&content, 0));
        assert!(!should_paginate("", 0));
    }
}
