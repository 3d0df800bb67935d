
use bsm_surface::{
    call_price, greeks, price, put_price, valuate, DomainError, MarketParameters, OptionType,
};
use test_utils::{assert_close, params, parameter_sweep, reference_params};

/// Reference Greeks for S=K=100, T=1, r=5%, σ=20%, in reporting units
/// (vega/rho per 1%, theta per day).
#[test]
fn test_reference_greeks() {
    let g = greeks(&reference_params()).expect("greeks failed");

    assert_close(g.delta_call, 0.6368306511756191, 1e-10, "delta call");
    assert_close(g.delta_put, -0.3631693488243809, 1e-10, "delta put");
    assert_close(g.gamma, 0.018762017345846895, 1e-10, "gamma");
    assert_close(g.vega, 0.3752403469169379, 1e-10, "vega");
    assert_close(g.theta_call, -6.414027546438197 / 365.0, 1e-10, "theta call");
    assert_close(g.theta_put, -1.657880423934626 / 365.0, 1e-10, "theta put");
    assert_close(g.rho_call, 0.5323248154537634, 1e-10, "rho call");
    assert_close(g.rho_put, -0.4189046090469506, 1e-10, "rho put");
}

/// delta_call - delta_put == 1 for every valid parameter set.
///
/// delta_put is Φ(d1) - 1, which is exact whenever Φ(d1) >= 0.5. Sweep points
/// with d1 < 0 (out-of-the-money calls, and at-the-money ones with a negative
/// rate) round Φ(d1) - 1, so there the difference is within one ulp of 1.
#[test]
fn test_delta_difference_is_one() {
    for p in parameter_sweep() {
        let g = greeks(&p).unwrap();
        if g.delta_call >= 0.5 {
            assert_eq!(g.delta_call - g.delta_put, 1.0, "{p:?}");
        } else {
            assert_close(g.delta_call - g.delta_put, 1.0, 1e-15, "delta call - delta put");
        }
    }

    let g = greeks(&reference_params()).unwrap();
    assert_eq!(g.delta_call - g.delta_put, 1.0);
}

/// σ√T underflowing to zero is rejected by greeks and valuate alike.
#[test]
fn test_greeks_reject_underflowing_total_volatility() {
    let p = MarketParameters {
        time_to_expiry: 1e-300,
        volatility: 1e-200,
        ..reference_params()
    };
    let expected = DomainError::NonPositive {
        name: "volatility_sqrt_time",
        value: 0.0,
    };
    assert_eq!(greeks(&p).unwrap_err(), expected);
    assert_eq!(valuate(&p).unwrap_err(), expected);
}

/// At σ = 1e155 the option is all time value: delta 1, gamma and vega 0, no NaN.
#[test]
fn test_greeks_finite_for_huge_volatility() {
    let g = greeks(&reference_params().with_volatility(1e155)).expect("greeks failed");
    for (name, value) in g.entries() {
        assert!(value.is_finite(), "{name} = {value}");
    }
    assert_eq!(g.delta_call, 1.0);
    assert_eq!(g.gamma, 0.0);
    assert_eq!(g.vega, 0.0);
}

/// Greeks that overflow through e^(-rT) fail rather than come back as NaN.
#[test]
fn test_greeks_overflow_rejected() {
    let p = params(1.0, 1e300, 1000.0, -1.0, 0.2);
    assert!(matches!(greeks(&p), Err(DomainError::NonFinite { .. })));
    assert!(matches!(
        valuate(&p),
        Err(DomainError::NonFinite {
            name: "call price",
            ..
        })
    ));
}

/// Greeks agree with central finite differences of the price.
#[test]
fn test_greeks_match_finite_differences() {
    let cases = [
        reference_params(),
        params(90.0, 100.0, 0.5, 0.03, 0.3),
        params(120.0, 100.0, 2.0, 0.01, 0.15),
        params(100.0, 110.0, 0.25, -0.005, 0.45),
    ];

    for p in cases {
        let g = greeks(&p).unwrap();

        let h = 1e-3;
        let up = call_price(&p.with_spot(p.spot + h)).unwrap();
        let mid = call_price(&p).unwrap();
        let down = call_price(&p.with_spot(p.spot - h)).unwrap();
        assert_close(g.delta_call, (up - down) / (2.0 * h), 1e-6, "delta call");
        assert_close(g.gamma, (up - 2.0 * mid + down) / (h * h), 1e-4, "gamma");

        let put_up = put_price(&p.with_spot(p.spot + h)).unwrap();
        let put_down = put_price(&p.with_spot(p.spot - h)).unwrap();
        assert_close(g.delta_put, (put_up - put_down) / (2.0 * h), 1e-6, "delta put");

        let hv = 1e-5;
        let dv = (call_price(&p.with_volatility(p.volatility + hv)).unwrap()
            - call_price(&p.with_volatility(p.volatility - hv)).unwrap())
            / (2.0 * hv);
        assert_close(g.vega * 100.0, dv, 1e-5, "vega");

        let hr = 1e-6;
        let bump_rate = |dr: f64| MarketParameters {
            risk_free_rate: p.risk_free_rate + dr,
            ..p
        };
        let dr_call = (call_price(&bump_rate(hr)).unwrap() - call_price(&bump_rate(-hr)).unwrap())
            / (2.0 * hr);
        let dr_put = (put_price(&bump_rate(hr)).unwrap() - put_price(&bump_rate(-hr)).unwrap())
            / (2.0 * hr);
        assert_close(g.rho_call * 100.0, dr_call, 1e-4, "rho call");
        assert_close(g.rho_put * 100.0, dr_put, 1e-4, "rho put");

        // Theta is decay as time passes, i.e. the negative of dV/dT
        let ht = 1e-6;
        let bump_time = |dt: f64| MarketParameters {
            time_to_expiry: p.time_to_expiry + dt,
            ..p
        };
        let dt_call = (call_price(&bump_time(ht)).unwrap() - call_price(&bump_time(-ht)).unwrap())
            / (2.0 * ht);
        let dt_put = (put_price(&bump_time(ht)).unwrap() - put_price(&bump_time(-ht)).unwrap())
            / (2.0 * ht);
        assert_close(g.theta_call * 365.0, -dt_call, 1e-4, "theta call");
        assert_close(g.theta_put * 365.0, -dt_put, 1e-4, "theta put");
    }
}

/// Sign conventions and ranges that hold for any valid input.
#[test]
fn test_greek_signs() {
    for p in parameter_sweep() {
        let g = greeks(&p).unwrap();
        assert!((0.0..=1.0).contains(&g.delta_call), "{:?}", p);
        assert!((-1.0..=0.0).contains(&g.delta_put), "{:?}", p);
        assert!(g.gamma >= 0.0 && g.gamma.is_finite(), "{:?}", p);
        assert!(g.vega >= 0.0 && g.vega.is_finite(), "{:?}", p);
        assert!(g.rho_call >= 0.0, "{:?}", p);
        assert!(g.rho_put <= 0.0, "{:?}", p);
        for (name, value) in g.entries() {
            assert!(value.is_finite(), "{name} not finite for {:?}", p);
        }
    }
}

#[test]
fn test_greeks_reject_invalid_input() {
    let p = MarketParameters {
        volatility: 0.0,
        ..reference_params()
    };
    assert!(matches!(
        greeks(&p),
        Err(DomainError::NonPositive {
            name: "volatility",
            ..
        })
    ));
    assert!(valuate(&p).is_err());
}

/// valuate() bundles exactly what price() and greeks() return separately.
#[test]
fn test_valuate_consistency() {
    for p in parameter_sweep().into_iter().step_by(7) {
        let v = valuate(&p).unwrap();
        let (prices, terms) = price(&p).unwrap();
        assert_eq!(v.params, p);
        assert_eq!(v.prices, prices);
        assert_eq!(v.terms, terms);
        assert_eq!(v.greeks, greeks(&p).unwrap());
        assert_eq!(v.prices.get(OptionType::Call), prices.call);
        assert_eq!(v.greeks.delta(OptionType::Put), v.greeks.delta_put);
    }
}

#[test]
fn test_entries_order() {
    let g = greeks(&reference_params()).unwrap();
    let names: Vec<&str> = g.entries().iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "Delta (Call)",
            "Delta (Put)",
            "Gamma",
            "Vega",
            "Theta (Call)",
            "Theta (Put)",
            "Rho (Call)",
            "Rho (Put)"
        ]
    );
    assert_eq!(g.entries()[2].1, g.gamma);
    assert_eq!(g.theta(OptionType::Call), g.theta_call);
    assert_eq!(g.rho(OptionType::Put), g.rho_put);
}
