//! Output formatting - plaintext and JSON.

use crate::network::NetworkReport;

/// Prints an analysis report in plain text format.
///
/// `show_communities` additionally lists every community's members instead
/// of just the count.
pub fn print_plain(report: &NetworkReport, show_communities: bool) {
    if report.chain.is_empty() {
        println!("No users in the network.");
    } else {
        println!("LONGEST FRIENDLY CHAIN ({} users):", report.chain.len);
        for user in &report.chain.users {
            println!("- {}", user);
        }
    }

    println!("COMMUNITIES: {}", report.community_count);
    if show_communities {
        for (i, community) in report.communities.iter().enumerate() {
            let members: Vec<&str> = community.iter().map(|u| u.email.as_str()).collect();
            println!("{}. ({} members) {}", i + 1, community.len(), members.join(", "));
        }
    }
}

/// Prints an analysis report in JSON format.
///
/// Falls back to a plain summary if serialization fails (should never happen
/// with these types, but the caller still gets output).
pub fn print_json(report: &NetworkReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!(
                "{{\"chain_len\": {}, \"community_count\": {}}}",
                report.chain.len, report.community_count
            );
        }
    }
}
