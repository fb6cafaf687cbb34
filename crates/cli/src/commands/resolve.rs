use crate::di::{DnsServices, UseCases};
use clap::Args;
use dns_proxy_application::ports::AnswerCache;
use dns_proxy_application::QueryContext;
use dns_proxy_domain::{DnsAnswerMessage, DnsQuestion, DomainError, RecordType};
use dns_proxy_infrastructure::dns::AnswerEncoder;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Args)]
pub struct ResolveArgs {
    /// Hostnames to resolve, in order
    #[arg(required = true)]
    names: Vec<String>,

    /// Question type; the answer is always an address record
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Per-question deadline in milliseconds
    #[arg(long, default_value = "2000")]
    timeout_ms: u64,

    /// Also print the encoded DNS response as hex
    #[arg(long)]
    wire: bool,
}

/// Resolves every name through one shared solver, so repeated names are
/// answered from the cache.
pub async fn run_resolve(
    args: ResolveArgs,
    env: Option<String>,
    use_cases: &UseCases,
    dns: &DnsServices,
) -> anyhow::Result<bool> {
    let mut all_answered = true;

    for (index, name) in args.names.iter().enumerate() {
        let question = DnsQuestion::new(name.as_str(), args.record_type);
        let mut ctx = QueryContext::new().with_timeout(Duration::from_millis(args.timeout_ms));
        if let Some(env) = &env {
            ctx = ctx.with_environment(env.as_str());
        }

        let result = use_cases.solve_question.execute(ctx, &question).await;
        match &result {
            Ok(answer) => println!("{}", answer),
            Err(e) => {
                all_answered = false;
                eprintln!("{}: {}", question.name, e);
            }
        }
        if args.wire {
            println!("{}", wire_hex(message_id(index), &question, &result)?);
        }
    }

    let metrics = dns.cache.metrics_snapshot();
    info!(
        entries = metrics.total_entries,
        capacity = metrics.capacity,
        hits = metrics.hits,
        misses = metrics.misses,
        insertions = metrics.insertions,
        evictions = metrics.evictions,
        invalidations = metrics.invalidations,
        hit_rate = metrics.hit_rate,
        "Answer cache"
    );

    Ok(all_answered)
}

/// Message ids stay at `u16::MAX` once the names outnumber them.
fn message_id(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

/// Hex dump of the DNS response a transport would send for `result`.
fn wire_hex(
    id: u16,
    question: &DnsQuestion,
    result: &Result<Arc<DnsAnswerMessage>, DomainError>,
) -> anyhow::Result<String> {
    let bytes = match result {
        Ok(answer) => AnswerEncoder::encode(id, question, answer)?,
        Err(e) => AnswerEncoder::encode_error(id, question, e)?,
    };
    Ok(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_message_id_saturates() {
        assert_eq!(message_id(0), 0);
        assert_eq!(message_id(65_535), u16::MAX);
        assert_eq!(message_id(65_536), u16::MAX);
        assert_eq!(message_id(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_wire_hex_encodes_answer() {
        let question = DnsQuestion::a("github.com");
        let answer = DnsAnswerMessage::address(&question, Ipv4Addr::new(192, 168, 0, 1));

        let dump = wire_hex(0x1234, &question, &Ok(Arc::new(answer))).unwrap();
        let bytes = hex::decode(&dump).unwrap();

        assert!(dump.starts_with("1234"));
        assert!(dump.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // RCODE (low nibble of byte 3) is NOERROR
        assert_eq!(bytes[3] & 0x0f, 0);
        assert_eq!(bytes[bytes.len() - 4..], [192u8, 168, 0, 1]);
    }

    #[test]
    fn test_wire_hex_encodes_not_found_as_nxdomain() {
        let question = DnsQuestion::a("gitlab.com");
        let result = Err(DomainError::NotFound("gitlab.com".to_string()));

        let bytes = hex::decode(wire_hex(7, &question, &result).unwrap()).unwrap();

        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 7);
        assert_eq!(bytes[3] & 0x0f, 3);
    }
}
