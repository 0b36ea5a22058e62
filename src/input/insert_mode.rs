use crossterm::event::KeyCode;

use crate::app::{AppState, FormField, PALETTE};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let Some(form) = state.add_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Left => match form.active_field {
            FormField::Icon => form.prev_icon(),
            FormField::Slot => form.prev_slot(),
            FormField::Title => {}
        },
        KeyCode::Right => match form.active_field {
            FormField::Icon => form.next_icon(),
            FormField::Slot => form.next_slot(),
            FormField::Title => {}
        },
        KeyCode::Backspace => {
            if form.active_field == FormField::Title {
                form.title.pop();
            }
        }
        KeyCode::Char(c) => match form.active_field {
            FormField::Title => form.title.push(c),
            FormField::Icon => match c {
                'h' => form.prev_icon(),
                'l' => form.next_icon(),
                '0' => form.icon_index = PALETTE.len() - 1,
                '1'..='9' => {
                    let index = (c as usize).saturating_sub('1' as usize);
                    if index < PALETTE.len() {
                        form.icon_index = index;
                    }
                }
                _ => {}
            },
            FormField::Slot => match c {
                'h' => form.prev_slot(),
                'l' => form.next_slot(),
                _ => {}
            },
        },
        _ => {}
    }
}
