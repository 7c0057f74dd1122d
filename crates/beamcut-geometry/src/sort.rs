//! Grouping loose edges into connected chains.

use crate::edge::Edge;
use std::collections::VecDeque;

/// Groups `edges` into maximal connected chains.
///
/// Each chain is head to tail: edges are reversed where needed so that every
/// edge starts where its predecessor ends. Chains stop growing once they
/// close. Chain order follows the first unused edge in input order.
pub fn sort_edges(edges: &[Edge]) -> Vec<Vec<Edge>> {
    let mut remaining: Vec<Edge> = edges.to_vec();
    let mut chains = Vec::new();

    while !remaining.is_empty() {
        let mut chain = VecDeque::from([remaining.remove(0)]);

        loop {
            let (Some(front), Some(back)) = (chain.front(), chain.back()) else {
                break;
            };
            let head = front.start();
            let tail = back.end();
            if head.coincides(&tail) {
                break;
            }

            let next = remaining.iter().enumerate().find_map(|(i, e)| {
                if e.start().coincides(&tail) {
                    Some((i, *e, true))
                } else if e.end().coincides(&tail) {
                    Some((i, e.reversed(), true))
                } else if e.end().coincides(&head) {
                    Some((i, *e, false))
                } else if e.start().coincides(&head) {
                    Some((i, e.reversed(), false))
                } else {
                    None
                }
            });

            match next {
                Some((i, edge, at_back)) => {
                    remaining.remove(i);
                    if at_back {
                        chain.push_back(edge);
                    } else {
                        chain.push_front(edge);
                    }
                }
                None => break,
            }
        }

        chains.push(chain.into_iter().collect());
    }

    chains
}
