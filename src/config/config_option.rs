use std::cmp::Ordering;

/// A configuration option, with a name and bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, clamped to the bounds of the option.
    ///
    /// A value incomparable with the minimum (e.g. NaN) is set to the minimum.
    pub fn set(&mut self, value: T) {
        self.value = match value.partial_cmp(&self.min) {
            Some(Ordering::Less) | None => self.min.clone(),
            _ if value > self.max => self.max.clone(),
            _ => value,
        };
        log::trace!("Config {} set", self.name);
    }
}
