use std::sync::Mutex;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Notify,
    Strong,
    Warn,
    Trace,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Notify => "[notify]",
            Level::Strong => "[strong]",
            Level::Warn => "[warn]  ",
            Level::Trace => "[trace] ",
        }
    }
}

#[macro_export]
macro_rules! notify {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Level::Notify,
        );
    }};
}

#[macro_export]
macro_rules! strong {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Level::Strong,
        );
    }};
}

#[macro_export]
macro_rules! warn {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Level::Warn,
        );
    }};
}

#[macro_export]
macro_rules! trace {
    () => {};

    ($($arg:tt)*) => {{
        let mut logger = $crate::LOGGER.lock().unwrap();

        logger.append(
            format!(
                $($arg)*
            ),
            $crate::Level::Trace,
        );
    }};
}

pub static LOGGER: Lazy<Mutex<Logger<300>>> = Lazy::new(|| Mutex::new(Logger::new()));

pub struct Logger<const N: usize> {
    lines: [(String, Level); N],
    head: usize,
    len: usize,
}

impl<const N: usize> Logger<N> {
    fn new() -> Self {
        Self {
            lines: std::array::from_fn(|_| (String::new(), Level::Trace)),
            head: 0,
            len: 0,
        }
    }

    pub fn append(&mut self, line: String, level: Level) {
        self.lines[self.head] = (line, level);
        self.head = (self.head + 1) % N;
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// number of lines currently retained.
    pub fn len(&self) -> usize {
        self.len.min(N)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// retained lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &(String, Level)> {
        let (a, b) = if self.len < N {
            (&self.lines[0..self.len], &[][..])
        } else {
            // wrapped around, so we need to chain two slices
            let (a, b) = self.lines.split_at(self.head);

            (b, a)
        };

        a.iter().chain(b)
    }

    pub fn format(&self) -> String {
        let mut out = String::new();

        for (line, level) in self.lines() {
            out += level.tag();
            out.push(' ');
            out += line;
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around() {
        let mut logger = Logger::<3>::new();
        for idx in 0..5 {
            logger.append(format!("line {idx}"), Level::Trace);
        }

        let lines: Vec<&str> = logger.lines().map(|(line, _)| line.as_str()).collect();
        assert_eq!(lines, ["line 2", "line 3", "line 4"]);
        assert_eq!(logger.len(), 3);
    }

    #[test]
    fn format_tags_levels() {
        let mut logger = Logger::<4>::new();
        logger.append("built tables".to_string(), Level::Trace);
        logger.append("odd input".to_string(), Level::Warn);

        assert_eq!(logger.format(), "[trace]  built tables\n[warn]   odd input\n");

        logger.clear();
        assert!(logger.is_empty());
        assert_eq!(logger.format(), "");
    }

    #[test]
    fn macros_reach_global_logger() {
        crate::notify!("decoder ready: {}", 64);
        let logger = LOGGER.lock().unwrap();
        assert!(logger.lines().any(|(line, level)| line == "decoder ready: 64" && *level == Level::Notify));
    }
}
