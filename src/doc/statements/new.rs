/*!
# `NEW`

## Purpose
Erase the program and variables.

## Remarks
Tracing is turned off as well. A running program stops.

## Example
```text
10 PRINT "GONE"
NEW
LIST
```

*/
