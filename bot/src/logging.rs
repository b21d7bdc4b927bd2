use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// colored stderr logger; frames go to stdout so the two never share a stream
    pub fn init(verbosity: LevelFilter) {
        colog::default_builder()
            .filter_level(verbosity)
            .target(env_logger::Target::Stderr)
            .init();
    }
}
