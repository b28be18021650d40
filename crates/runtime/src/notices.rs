/// User-facing notification level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic within one board.
    pub seq: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Non-fatal notifications waiting to be shown by the UI.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_seq: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            seq: self.next_seq,
            level,
            message: message.into(),
        });
        self.next_seq += 1;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.emit(NoticeLevel::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.emit(NoticeLevel::Error, message);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeBoard, NoticeLevel};

    #[test]
    fn records_notices_in_order() {
        let mut board = NoticeBoard::new();
        board.info("scheduled");
        board.error("failed");
        let levels: Vec<NoticeLevel> = board.notices().iter().map(|n| n.level).collect();
        assert_eq!(levels, vec![NoticeLevel::Info, NoticeLevel::Error]);
        assert_eq!(board.notices()[1].seq, 1);
    }

    #[test]
    fn drain_clears_but_keeps_sequence() {
        let mut board = NoticeBoard::new();
        board.info("a");
        assert_eq!(board.drain().len(), 1);
        assert!(board.notices().is_empty());
        board.info("b");
        assert_eq!(board.notices()[0].seq, 1);
    }
}
