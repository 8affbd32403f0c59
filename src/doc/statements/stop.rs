/*!
# `STOP`

## Purpose
Halt the program where it stands.

## Remarks
Behaves like `END`. Variables keep their values so they can be
examined with direct statements.

## Example
```text
10 A=5:STOP
RUN
PRINT A
5
```

*/
