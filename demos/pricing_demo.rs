// demos/pricing_demo.rs

//! Demonstration of single-point Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build an option parameter set
//! 2. Price the call and the put
//! 3. Read off the trivially derivable Greeks
//! 4. Cross-check the prices against put-call parity

use anyhow::Result;
use heatmap_lib::{call_delta, gamma, price, put_delta, OptionParameters, OptionType};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = OptionParameters {
        spot: 100.0,
        strike: 95.0,
        volatility: 0.20,
        time_to_maturity: 0.50,
        risk_free_rate: 0.05,
        dividend_yield: 0.01,
    };

    println!("Scenario:");
    println!("  Spot:             ${:.2}", params.spot);
    println!("  Strike:           ${:.2}", params.strike);
    println!("  Volatility:       {:.0}%", params.volatility * 100.0);
    println!("  Time to maturity: {:.2} years", params.time_to_maturity);
    println!("  Risk-free rate:   {:.2}%", params.risk_free_rate * 100.0);
    println!("  Dividend yield:   {:.2}%", params.dividend_yield * 100.0);

    let call = price(OptionType::Call, &params)?;
    let put = price(OptionType::Put, &params)?;

    println!("\nPrices:");
    println!("  Call: ${:.2}", call);
    println!("  Put:  ${:.2}", put);

    println!("\nGreeks:");
    println!("  Call delta: {:.4}", call_delta(&params)?);
    println!("  Put delta:  {:.4}", put_delta(&params)?);
    println!("  Gamma:      {:.4}", gamma(&params)?);

    // C - P should equal S e^(-dt) - K e^(-rt) up to display rounding
    let forward_value = params.spot * (-params.dividend_yield * params.time_to_maturity).exp()
        - params.strike * (-params.risk_free_rate * params.time_to_maturity).exp();
    println!("\nPut-call parity check:");
    println!("  C - P:               {:.4}", call - put);
    println!("  S e^-dt - K e^-rt:   {:.4}", forward_value);
    println!(
        "  Parity holds within rounding: {}",
        ((call - put) - forward_value).abs() <= 0.01
    );

    Ok(())
}
