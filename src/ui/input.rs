/// Maps iced keyboard events onto lightbox keys
use iced::keyboard::{self, key::Named, Key};

use crate::state::lightbox::{LightboxInput, LightboxKey};
use crate::Message;

/// The lightbox key for a pressed key, if it has one
pub fn lightbox_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

/// Key press handler for `keyboard::on_key_press`
pub fn on_key_press(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    lightbox_key(&key).map(|key| Message::Lightbox(LightboxInput::KeyPressed(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_keys() {
        assert_eq!(lightbox_key(&Key::Named(Named::Escape)), Some(LightboxKey::Escape));
        assert_eq!(lightbox_key(&Key::Named(Named::ArrowLeft)), Some(LightboxKey::ArrowLeft));
        assert_eq!(lightbox_key(&Key::Named(Named::ArrowRight)), Some(LightboxKey::ArrowRight));
        assert_eq!(lightbox_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(lightbox_key(&Key::Character("a".into())), None);
    }
}
