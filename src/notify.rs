use time::{self, Duration, Timespec};

/// How long a notice stays visible.
const DECAY_SECS: i64 = 3;

struct Notice {
    text: String,
    expires: Timespec,
}

/// One pending user-facing notice with a fixed decay deadline. Posting is
/// fire-and-forget: a notice cannot be dismissed early, it only runs out.
pub struct Notifier {
    pending: Option<Notice>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Notifier {
        Notifier::with_ttl(Duration::seconds(DECAY_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Notifier {
        Notifier {
            pending: None,
            ttl: ttl,
        }
    }

    /// Post a notice, replacing any pending one.
    pub fn post(&mut self, text: String) {
        self.pending = Some(Notice {
            text: text,
            expires: time::get_time() + self.ttl,
        });
    }

    /// The pending notice, while it is still live. Expired notices are
    /// dropped on the way out.
    pub fn current(&mut self) -> Option<String> {
        let expired = match self.pending {
            Some(ref notice) => notice.expires <= time::get_time(),
            None => return None,
        };

        if expired {
            self.pending = None;
            return None;
        }

        self.pending.as_ref().map(|notice| notice.text.clone())
    }
}
