/// Filter out bouncing of a mechanical contact.
///
/// The state flips only after `N` consecutive samples agree on the new value.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: u8> {
    active: bool,
    streak: u8,
}

impl<const N: u8> Debounced<N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            active: false,
            streak: 0,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        if value == self.active {
            self.streak = 0;
        } else {
            self.streak += 1;
            if self.streak >= N {
                self.active = value;
                self.streak = 0;
            }
        }
        self.active
    }
}
