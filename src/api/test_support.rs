#![allow(clippy::expect_used)]

use crate::api::configuration::RequestDescriptor;
use crate::host::{HttpClient, HttpResponse, Logger};
use anyhow::{anyhow, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replies with queued responses in order and records every request.
#[derive(Clone, Default)]
pub struct ScriptedHttp {
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, String>>>>,
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl ScriptedHttp {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .expect("replies lock")
            .push_back(Err(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpClient for ScriptedHttp {
    async fn request(&self, request: &RequestDescriptor) -> Result<HttpResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let reply = self.replies.lock().expect("replies lock").pop_front();
        match reply {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("no scripted reply for {}", request.url)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Verbose,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub severity: Severity,
    pub message: String,
    pub detail: String,
}

/// Keeps every logged line for later assertions.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<Line>>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().expect("lines lock").clone()
    }

    pub fn errors(&self) -> Vec<Line> {
        self.lines()
            .into_iter()
            .filter(|line| line.severity == Severity::Error)
            .collect()
    }

    fn push(&self, severity: Severity, message: &str, detail: &str) {
        self.lines.lock().expect("lines lock").push(Line {
            severity,
            message: message.to_string(),
            detail: detail.to_string(),
        });
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str, detail: &str) {
        self.push(Severity::Info, message, detail);
    }

    fn verbose(&self, message: &str, detail: &str) {
        self.push(Severity::Verbose, message, detail);
    }

    fn error(&self, message: &str, detail: &str) {
        self.push(Severity::Error, message, detail);
    }
}
