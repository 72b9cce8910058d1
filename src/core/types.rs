//! Enumerated wire domains shared across the derivatives product lines.
//!
//! All of them are open: see [`wire_enum`](crate::core::wire).

use crate::core::wire::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum Side {
        Buy => "Buy",
        Sell => "Sell",
        None => "None",
    }
}

wire_enum! {
    pub enum OrderType {
        Limit => "Limit",
        Market => "Market",
    }
}

wire_enum! {
    pub enum TimeInForce {
        GoodTillCancel => "GoodTillCancel",
        ImmediateOrCancel => "ImmediateOrCancel",
        FillOrKill => "FillOrKill",
        PostOnly => "PostOnly",
    }
}

wire_enum! {
    pub enum OrderStatus {
        Created => "Created",
        Rejected => "Rejected",
        New => "New",
        PartiallyFilled => "PartiallyFilled",
        Filled => "Filled",
        Cancelled => "Cancelled",
        PendingCancel => "PendingCancel",
        Untriggered => "Untriggered",
        Deactivated => "Deactivated",
        Triggered => "Triggered",
        Active => "Active",
    }
}

wire_enum! {
    /// Price type used to trigger take-profit / stop-loss
    pub enum TriggerPrice {
        LastPrice => "LastPrice",
        IndexPrice => "IndexPrice",
        MarkPrice => "MarkPrice",
    }
}

wire_enum! {
    /// Cursor direction for paginated lists
    pub enum Direction {
        Prev => "prev",
        Next => "next",
    }
}

wire_enum! {
    pub enum SortOrder {
        Desc => "desc",
        Asc => "asc",
    }
}

wire_enum! {
    pub enum ExecType {
        Trade => "Trade",
        AdlTrade => "AdlTrade",
        Funding => "Funding",
        BustTrade => "BustTrade",
        Settle => "Settle",
    }
}

wire_enum! {
    pub enum TpSlMode {
        Full => "Full",
        Partial => "Partial",
    }
}

wire_enum! {
    pub enum CreateType {
        CreateByUser => "CreateByUser",
        CreateByClosing => "CreateByClosing",
        CreateByAdminClosing => "CreateByAdminClosing",
        CreateByStopOrder => "CreateByStopOrder",
        CreateByTakeProfit => "CreateByTakeProfit",
        CreateByStopLoss => "CreateByStopLoss",
        CreateByTrailingStop => "CreateByTrailingStop",
        CreateByLiq => "CreateByLiq",
        CreateByAdl => "CreateByAdl_PassThrough",
        CreateByTakeOver => "CreateByTakeOver_PassThrough",
    }
}

wire_enum! {
    pub enum CancelType {
        CancelByUser => "CancelByUser",
        CancelByReduceOnly => "CancelByReduceOnly",
        CancelByPrepareLiq => "CancelByPrepareLiq",
        CancelAllBeforeLiq => "CancelAllBeforeLiq",
        CancelByPrepareAdl => "CancelByPrepareAdl",
        CancelAllBeforeAdl => "CancelAllBeforeAdl",
        CancelByAdmin => "CancelByAdmin",
        CancelByTpSlTsClear => "CancelByTpSlTsClear",
        CancelByPzSideCh => "CancelByPzSideCh",
    }
}

wire_enum! {
    pub enum TickDirection {
        PlusTick => "PlusTick",
        ZeroPlusTick => "ZeroPlusTick",
        MinusTick => "MinusTick",
        ZeroMinusTick => "ZeroMinusTick",
    }
}

wire_enum! {
    pub enum KlineInterval {
        Min1 => "1",
        Min3 => "3",
        Min5 => "5",
        Min15 => "15",
        Min30 => "30",
        Hour1 => "60",
        Hour2 => "120",
        Hour4 => "240",
        Hour6 => "360",
        Hour12 => "720",
        Day => "D",
        Week => "W",
        Month => "M",
    }
}

/// Position index for hedge mode. Numeric on the wire, so it is a transparent
/// integer rather than a token enum; any value upstream sends is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionIdx(pub i32);

impl PositionIdx {
    pub const ONE_WAY: Self = Self(0);
    pub const BUY_SIDE: Self = Self(1);
    pub const SELL_SIDE: Self = Self(2);
}
