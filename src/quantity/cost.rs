quantity!(Gbp, "GBP");
