use crate::schemas::SkipOption;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

pub fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

pub fn create_ctrl_key_event(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

pub fn create_test_skip(id: u64, size: u32) -> SkipOption {
    SkipOption {
        id,
        size,
        price_before_vat: 211.0,
        vat: 20.0,
        hire_period_days: 14,
        allowed_on_road: size <= 8,
        allows_heavy_waste: size >= 6,
    }
}

pub fn create_test_catalog(count: usize) -> Vec<SkipOption> {
    (0..count)
        .map(|i| create_test_skip(100 + i as u64, 4 + 2 * i as u32))
        .collect()
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            output.push_str(cell.symbol());
        }
        output.push('\n');
    }
    output
}
