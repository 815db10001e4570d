//! DB-compatible types.
//!
//! The types in this module mirror the SQLite tables: fields are named after
//! their columns and serialise in snake_case, and the SQL that reads or writes
//! each table lives beside its type.

mod authority;
pub use authority::Authority;

mod candidate;
pub use candidate::{Candidate, CandidateCore, CandidateListing, NewCandidate};

mod citizen;
pub use citizen::Citizen;

mod dashboard;

mod election;
pub use election::{Election, ElectionCore, ElectionListing, NewElection};

mod export;
pub use export::{ExportTable, TableDump, INVALID_TABLE};

mod party;
pub use party::{NewParty, Party, PartyCore, PartyListing};

mod report;

mod vote;
pub use vote::{NewVote, Vote, VoteCore, VoteListing, ALREADY_VOTED};

mod voter;
pub use voter::{NewVoter, Voter, VoterCore};
