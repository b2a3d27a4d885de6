/// Demonstration payload that announces its own lifetime.
#[derive(Debug)]
pub struct Widget {
    name: &'static str,
}

impl Widget {
    pub fn new(name: &'static str) -> Self {
        log::info!("Widget({name}) created");
        Self { name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn show(&self) {
        log::info!("Widget({}) shown", self.name);
    }

    pub fn display(&self) {
        log::info!("hello from Widget({})", self.name);
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        log::info!("Widget({}) dropped", self.name);
    }
}
