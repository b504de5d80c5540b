// src/drill/cues.rs

//! SSML cue texts spoken during a session.

use arrayvec::ArrayString;
use core::fmt::Write;

pub const INTRO: &str = "<speak>Welcome to the Historical European Martial Arts training. \
Together, we will train the German Longsword techniques, created by the 14th-century fencing master, \
<lang xml:lang=\"de-DE\">Johannes Liechtenauer.</lang> \
To score your technique, I utilize cloud computing, deep learning, and the real time data generated by your swords' sensors. \
I will call for a guard or a strike, and you can execute it. So, grab your sword! We start in: 3. 2. 1.</speak>";

pub const GET_READY: &str = "<speak>Get ready!</speak>";
pub const OK: &str = "<speak>OK!</speak>";

/// Wraps a German technique name the way the voice expects it.
pub(crate) fn german(prefix: &str, name: &str) -> alloc::string::String {
    alloc::format!("<speak>{}<lang xml:lang=\"de-DE\">{}.</lang></speak>", prefix, name)
}

/// Countdown number cue, e.g. `<speak>2</speak>`.
pub fn countdown(number: usize) -> ArrayString<40> {
    let mut cue = ArrayString::new();
    // 15 bytes of markup plus at most 20 digits: always fits.
    let _ = write!(cue, "<speak>{}</speak>", number);
    cue
}

/// Closing cue. A full session gets the thank-you; an interrupted one says so.
pub fn closing(completed: bool, packets: usize) -> alloc::string::String {
    if completed {
        alloc::format!(
            "<speak>Session complete! I recorded {} movements. \
Now, I can use your data to also become better at grading. \
Thank you for using longsword training.</speak>",
            packets
        )
    } else {
        alloc::format!(
            "<speak>The sword sensor stopped responding, so the session ended early. \
I recorded {} movements. Thank you for using longsword training.</speak>",
            packets
        )
    }
}
