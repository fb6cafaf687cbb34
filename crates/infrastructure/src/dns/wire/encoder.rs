//! DNS Answer Encoder
//!
//! Turns locally computed answers into wire-format responses using
//! `hickory-proto`, so a transport only has to write the bytes back.

use super::record_type_map::RecordTypeMapper;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct AnswerEncoder;

impl AnswerEncoder {
    /// Encode a NOERROR response carrying `answer`
    ///
    /// The response is authoritative, echoes the question, and writes every
    /// answer record with the TTL it carries (0 for local answers).
    pub fn encode(
        id: u16,
        question: &DnsQuestion,
        answer: &DnsAnswerMessage,
    ) -> Result<Vec<u8>, DomainError> {
        let mut message = Self::response(id, question, ResponseCode::NoError)?;

        for record in answer.answers() {
            let name = Self::parse_name(&record.name)?;
            message.add_answer(Record::from_rdata(
                name,
                record.ttl,
                RData::A(A(record.address)),
            ));
        }

        Self::serialize_message(&message)
    }

    /// Encode the response for a failed resolution
    ///
    /// `NotFound` becomes NXDOMAIN, everything else SERVFAIL.
    pub fn encode_error(
        id: u16,
        question: &DnsQuestion,
        error: &DomainError,
    ) -> Result<Vec<u8>, DomainError> {
        let code = if error.is_not_found() {
            ResponseCode::NXDomain
        } else {
            ResponseCode::ServFail
        };
        let message = Self::response(id, question, code)?;
        Self::serialize_message(&message)
    }

    fn response(
        id: u16,
        question: &DnsQuestion,
        code: ResponseCode,
    ) -> Result<Message, DomainError> {
        let mut query = Query::new();
        query.set_name(Self::parse_name(&question.name)?);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.metadata.authoritative = true;
        message.metadata.response_code = code;
        message.add_query(query);
        Ok(message)
    }

    fn parse_name(name: &str) -> Result<Name, DomainError> {
        Name::from_str(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
