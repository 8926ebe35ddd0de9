use thiserror::Error;

use crate::{
    state::Portfolio,
    transactions::{TradeAction, TransactionRecord},
};

/// Why a trade did not execute. A rejected trade never touches the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TradeRejection {
    #[error("no instrument at index {index}")]
    UnknownInstrument { index: usize },
    #[error("cash {cash:.2} does not cover price {price:.2}")]
    InsufficientCash { cash: f64, price: f64 },
    #[error("no shares of instrument {index} to sell")]
    NothingToSell { index: usize },
}

pub fn buy(portfolio: &mut Portfolio, index: usize) -> Result<TransactionRecord, TradeRejection> {
    let cash = portfolio.cash;
    let stock = portfolio
        .catalog
        .get_mut(index)
        .ok_or(TradeRejection::UnknownInstrument { index })?;
    if cash < stock.price {
        return Err(TradeRejection::InsufficientCash {
            cash,
            price: stock.price,
        });
    }

    let amount = stock.price;
    stock.owned += 1;
    portfolio.cash = cash - amount;

    Ok(TransactionRecord {
        instrument_name: stock.name.clone(),
        action: TradeAction::Buy,
        amount,
        balance_before: cash,
        balance_after: portfolio.cash,
    })
}

pub fn sell(portfolio: &mut Portfolio, index: usize) -> Result<TransactionRecord, TradeRejection> {
    let cash = portfolio.cash;
    let stock = portfolio
        .catalog
        .get_mut(index)
        .ok_or(TradeRejection::UnknownInstrument { index })?;
    if stock.owned == 0 {
        return Err(TradeRejection::NothingToSell { index });
    }

    let amount = stock.price;
    stock.owned -= 1;
    portfolio.cash = cash + amount;

    Ok(TransactionRecord {
        instrument_name: stock.name.clone(),
        action: TradeAction::Sell,
        amount,
        balance_before: cash,
        balance_after: portfolio.cash,
    })
}
