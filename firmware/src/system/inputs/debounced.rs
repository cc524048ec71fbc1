/// Majority vote over the last `N` samples.
///
/// With a sample taken every control loop tick, this filters out contact
/// bouncing while delaying the edge by at most `N / 2` ticks.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: usize> {
    samples: [bool; N],
    pointer: usize,
}

impl<const N: usize> Debounced<N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            samples: [false; N],
            pointer: 0,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.samples[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
        let up = self.samples.iter().filter(|s| **s).count();
        up > N / 2
    }
}
