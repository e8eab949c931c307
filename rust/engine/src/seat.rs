use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default balance every seat starts a session with.
pub const STARTING_BALANCE: i64 = 100;

/// One of the three fixed seats at an Afghound table.
/// Seats are never created or destroyed; the fixed order below is the deal
/// order and the initial turn order of every showdown.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Seat {
    #[serde(rename = "Afghound")]
    Afghound,
    #[serde(rename = "Player 2")]
    Player2,
    #[serde(rename = "Player 3")]
    Player3,
}

impl Seat {
    pub const ALL: [Seat; 3] = [Seat::Afghound, Seat::Player2, Seat::Player3];

    pub fn name(self) -> &'static str {
        match self {
            Seat::Afghound => "Afghound",
            Seat::Player2 => "Player 2",
            Seat::Player3 => "Player 3",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::Afghound => 0,
            Seat::Player2 => 1,
            Seat::Player3 => 2,
        }
    }

    /// The two seats other than `self`, in fixed order.
    pub fn others(self) -> impl Iterator<Item = Seat> {
        Seat::ALL.into_iter().filter(move |s| *s != self)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Seat {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Seat::ALL
            .into_iter()
            .find(|seat| seat.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownSeat(s.to_string()))
    }
}

/// The wallet ledger: one integer balance per seat.
///
/// Every mutation goes through a zero-sum primitive, so no payout rule can
/// create or destroy money on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallets {
    balances: [i64; 3],
}

impl Default for Wallets {
    fn default() -> Self {
        Self::with_balance(STARTING_BALANCE)
    }
}

impl Wallets {
    pub fn with_balance(balance: i64) -> Self {
        Self {
            balances: [balance; 3],
        }
    }

    pub fn from_balances(balances: [i64; 3]) -> Self {
        Self { balances }
    }

    pub fn get(&self, seat: Seat) -> i64 {
        self.balances[seat.index()]
    }

    pub fn total(&self) -> i64 {
        self.balances.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, i64)> + '_ {
        Seat::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// `seat` collects `amount` from each of the other two seats.
    pub fn collect_from_each(&mut self, seat: Seat, amount: i64) {
        for other in seat.others() {
            self.transfer(other, seat, amount);
        }
    }

    /// `seat` pays `amount` to each of the other two seats.
    pub fn pay_each(&mut self, seat: Seat, amount: i64) {
        for other in seat.others() {
            self.transfer(seat, other, amount);
        }
    }

    pub fn transfer(&mut self, from: Seat, to: Seat, amount: i64) {
        self[from] -= amount;
        self[to] += amount;
    }

    /// Per-seat difference `self - before`.
    pub fn delta_since(&self, before: &Wallets) -> [i64; 3] {
        let mut d = [0; 3];
        for seat in Seat::ALL {
            d[seat.index()] = self.get(seat) - before.get(seat);
        }
        d
    }
}

impl Index<Seat> for Wallets {
    type Output = i64;

    fn index(&self, seat: Seat) -> &i64 {
        &self.balances[seat.index()]
    }
}

impl IndexMut<Seat> for Wallets {
    fn index_mut(&mut self, seat: Seat) -> &mut i64 {
        &mut self.balances[seat.index()]
    }
}
