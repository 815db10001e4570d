use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;

use crate::error::Result;
use crate::model::db::{
    Authority, Candidate, CandidateCore, Citizen, Election, ElectionCore, Party, PartyCore, Vote,
    VoteCore, Voter, VoterCore,
};

use super::{count, ensure_schema_exists};

/// Load the sample dataset if there are no parties yet.
/// Everything goes in one transaction, so a failure leaves the database empty.
pub fn ensure_seed_data_exists(conn: &mut Connection) -> Result<()> {
    ensure_schema_exists(conn)?;
    if count::<Party>(conn)? > 0 {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for party in parties() {
        party.insert(&tx)?;
    }
    for authority in authorities() {
        authority.insert(&tx)?;
    }
    for election in elections() {
        election.insert(&tx)?;
    }
    for candidate in candidates() {
        candidate.insert(&tx)?;
    }
    for voter in voters() {
        voter.insert(&tx)?;
    }
    for citizen in citizens() {
        citizen.insert(&tx)?;
    }
    for vote in votes() {
        vote.insert(&tx)?;
    }
    tx.commit()?;

    info!("Loaded sample election records");
    Ok(())
}

/// Parse a literal `YYYY-MM-DD` date from the tables below.
fn date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|_| panic!("bad seed date {value}"))
}

fn parties() -> Vec<Party> {
    [
        (1, "BJP", "Lotus"),
        (3, "Congress", "Hand"),
        (4, "AAP", "Broom"),
        (5, "YCP", "Fan"),
        (6, "TDP", "Plough"),
    ]
    .into_iter()
    .map(|(id, name, symbol)| Party {
        id,
        party: PartyCore {
            name: name.into(),
            symbol: symbol.into(),
        },
    })
    .collect()
}

fn authorities() -> Vec<Authority> {
    [
        (10, "IEC", "Birla", "Y", "1998-08-15"),
        (20, "MCC", "Sitaraman", "Y", "1989-08-15"),
        (30, "AEC", "Chidambram", "N", "1998-08-15"),
    ]
    .into_iter()
    .map(|(id, name, chief, experience, established)| Authority {
        id,
        name: name.into(),
        chief: chief.into(),
        experience: experience.into(),
        established: date(established),
    })
    .collect()
}

fn elections() -> Vec<Election> {
    [
        (101, 1000, 6, "2019-03-22", "5", 10),
        (102, 1100, 7, "2017-01-01", "6", 20),
        (103, 5000, 8, "2016-05-03", "5", 30),
        (104, 7000, 5, "2013-02-07", "5", 10),
        (105, 8000, 3, "1946-01-06", "6", 20),
        (106, 9000, 2, "1991-05-07", "4", 30),
        (107, 3000, 7, "1997-01-08", "4", 10),
        (108, 9500, 9, "1947-02-10", "5", 20),
        (109, 8500, 8, "1949-06-11", "5", 30),
    ]
    .into_iter()
    .map(
        |(id, voters, participants, result_date, ruling, authority_id)| Election {
            id,
            election: ElectionCore {
                voters,
                participants,
                result_date: date(result_date),
                ruling: ruling.into(),
                authority_id,
            },
        },
    )
    .collect()
}

fn candidates() -> Vec<Candidate> {
    [
        (1, "Bhargavi", 4, 103),
        (2, "Sakshi", 3, 105),
        (3, "Shivanjali", 4, 107),
        (4, "Akshay", 6, 109),
        (5, "Guru", 3, 101),
        (6, "Ram", 1, 109),
        (7, "Vikram", 1, 101),
        (8, "Hitender", 4, 104),
        (9, "Shanu", 5, 108),
        (10, "Vishnu", 1, 109),
    ]
    .into_iter()
    .map(|(id, name, party_id, election_id)| Candidate {
        id,
        candidate: CandidateCore {
            name: name.into(),
            party_id,
            election_id,
        },
    })
    .collect()
}

fn voters() -> Vec<Voter> {
    [
        (1, "Bhargavi", "F", 10, 1412),
        (2, "Ram", "M", 20, 1734),
        (9, "Sita", "F", 20, 1812),
        (10, "Siva", "M", 30, 1914),
        (11, "Gopi", "F", 30, 1617),
        (12, "Govind", "M", 20, 1373),
        (19, "Krish", "M", 10, 1472),
        (20, "Mothra", "F", 10, 1893),
    ]
    .into_iter()
    .map(|(id, name, sex, authority_id, aadhaar)| Voter {
        id,
        voter: VoterCore {
            name: name.into(),
            sex: sex.into(),
            authority_id,
            aadhaar,
        },
    })
    .collect()
}

fn citizens() -> Vec<Citizen> {
    [
        (1412, "Bhargavi", "2000-06-08", 24, "F"),
        (1493, "Bala", "1989-06-07", 35, "M"),
        (1734, "Ram", "1948-11-10", 76, "M"),
        (1812, "Sita", "1895-06-05", 129, "F"),
        (1914, "Siva", "1993-07-06", 31, "M"),
        (1617, "Gopal", "1991-08-06", 33, "M"),
        (1373, "Govind", "1982-05-07", 42, "M"),
        (1472, "Krish", "1990-01-08", 34, "M"),
        (1893, "Mothra", "1998-02-07", 26, "F"),
    ]
    .into_iter()
    .map(|(aadhaar, name, dob, age, gender)| Citizen {
        aadhaar,
        name: name.into(),
        dob: date(dob),
        age,
        gender: gender.into(),
    })
    .collect()
}

fn votes() -> Vec<Vote> {
    [
        (11, 1, "1990-01-26", 103, 1),
        (12, 2, "1995-01-26", 106, 2),
        (19, 3, "2000-01-26", 101, 9),
        (110, 5, "2005-01-26", 102, 10),
        (111, 6, "2010-01-26", 104, 11),
        (112, 8, "2015-01-26", 108, 12),
        (119, 9, "2020-01-26", 107, 19),
        (120, 7, "2005-01-26", 107, 20),
    ]
    .into_iter()
    .map(|(id, candidate_id, day, election_id, voter_id)| Vote {
        id,
        vote: VoteCore {
            candidate_id,
            date: date(day),
            election_id,
            voter_id,
        },
    })
    .collect()
}
