use super::{DnsQuestion, RecordType};
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// TTL written on every locally built answer.
///
/// Downstream resolvers must come back to this server for every lookup, the
/// effective lifetime of a record is tracked by the answer cache instead.
pub const LOCAL_ANSWER_TTL: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DnsClass {
    #[default]
    IN,
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resource record of the answer section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: Arc<str>,
    pub ttl: u32,
    pub class: DnsClass,
    pub record_type: RecordType,
    pub address: Ipv4Addr,
}

impl AnswerRecord {
    pub fn a(name: Arc<str>, address: Ipv4Addr) -> Self {
        Self {
            name,
            ttl: LOCAL_ANSWER_TTL,
            class: DnsClass::IN,
            record_type: RecordType::A,
            address,
        }
    }
}

/// Zone-file style rendering: `github.com.\t0\tIN\tA\t192.168.0.1`
impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.ttl, self.class, self.record_type, self.address
        )
    }
}

/// Answer section produced for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsAnswerMessage {
    pub answers: Vec<AnswerRecord>,
}

impl DnsAnswerMessage {
    /// Builds the single address answer for `question`.
    pub fn address(question: &DnsQuestion, address: Ipv4Addr) -> Self {
        Self {
            answers: vec![AnswerRecord::a(Arc::clone(&question.name), address)],
        }
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl fmt::Display for DnsAnswerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.answers.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
