use std::borrow::Cow;

/// A fixed, user-facing error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The dialog title
    pub title: Cow<'static, str>,
    /// The dialog body
    pub message: Cow<'static, str>,
}

impl Notice {
    /// Create a notice
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Notice {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Shown when the target could not be started
    pub fn spawn_failure() -> Self {
        Notice::new(
            "Launch Error",
            "Unable to start the application.\nPlease try reinstalling.",
        )
    }

    /// Shown when the launcher could not work out where it is installed
    pub fn self_path_unresolved() -> Self {
        Notice::new(
            "Launch Error",
            "Unable to locate the application directory.\nPlease try reinstalling.",
        )
    }
}

/// Something that can put a notice in front of the user
///
/// Implementations are expected to block until the user has seen the notice.
pub trait Notifier {
    /// Show the notice
    fn notify(&self, notice: &Notice);
}

/// Writes notices to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{}: {}", notice.title, notice.message);
    }
}

/// Shows notices in a modal message box with an error icon and a single OK button
#[cfg(all(target_os = "windows", feature = "dialog"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxNotifier;

#[cfg(all(target_os = "windows", feature = "dialog"))]
impl Notifier for MessageBoxNotifier {
    fn notify(&self, notice: &Notice) {
        use windows::core::HSTRING;
        use windows::Win32::Foundation::HWND;
        use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

        let title = HSTRING::from(notice.title.as_ref());
        let message = HSTRING::from(notice.message.as_ref());

        // SAFETY: both strings are owned HSTRINGs that outlive the call and there is no owner window.
        unsafe {
            MessageBoxW(HWND::default(), &message, &title, MB_OK | MB_ICONERROR);
        }
    }
}

/// The notifier a launcher uses unless told otherwise
pub fn default_notifier() -> Box<dyn Notifier> {
    #[cfg(all(target_os = "windows", feature = "dialog"))]
    {
        Box::new(MessageBoxNotifier)
    }

    #[cfg(not(all(target_os = "windows", feature = "dialog")))]
    {
        Box::new(StderrNotifier)
    }
}
