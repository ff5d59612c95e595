quantity!(KilowattHourRate, "GBP/kWh");
