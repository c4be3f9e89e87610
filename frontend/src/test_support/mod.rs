#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{CourseRecord, WelcomeContent};
    use crate::state::diagnostics::{DiagnosticEvent, DiagnosticSink, Diagnostics};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct RecordingDiagnostics {
        events: Rc<RefCell<Vec<DiagnosticEvent>>>,
    }

    impl RecordingDiagnostics {
        pub fn diagnostics(&self) -> Diagnostics {
            Diagnostics::new(self.clone())
        }

        pub fn events(&self) -> Vec<DiagnosticEvent> {
            self.events.borrow().clone()
        }
    }

    impl DiagnosticSink for RecordingDiagnostics {
        fn emit(&self, event: DiagnosticEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    pub fn course(id: i64, title: &str) -> CourseRecord {
        CourseRecord {
            id,
            title: title.into(),
            level: "Beginner".into(),
            description: format!("About {}", title),
            instructor: "Dr. Smith".into(),
            duration: "4h".into(),
        }
    }

    pub fn welcome(title: &str, subtitle: &str, messages: &[&str]) -> WelcomeContent {
        WelcomeContent {
            title: title.into(),
            subtitle: subtitle.into(),
            messages: messages.iter().map(|m| m.to_string()).collect(),
        }
    }
}
