lib::entry!(y2023::calibration::solve, input = "d01.txt", expect = (209, 281));
